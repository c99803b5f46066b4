// src/config.rs
use sqlx::postgres::PgConnectOptions;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

const DEFAULT_PORT: u16 = 8081;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Runtime settings, read once at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database: DatabaseConfig,
    pub max_connections: u32,
}

/// Where the database lives. A full `DATABASE_URL` wins over the split
/// `PG_*` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    Url(String),
    Params {
        host: String,
        port: u16,
        user: String,
        password: String,
        dbname: String,
    },
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => DatabaseConfig::Url(url),
            _ => DatabaseConfig::Params {
                host: text("PG_HOST", "pgpool"),
                port: parse_or("PG_PORT", lookup("PG_PORT"), 5432),
                user: text("PG_USER", "customuser"),
                password: text("PG_PASSWORD", "custompassword"),
                dbname: text("PG_DBNAME", "co"),
            },
        };

        Self {
            host: parse_or("HOST", lookup("HOST"), IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT),
            database,
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                lookup("DB_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            ),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.database {
            DatabaseConfig::Url(url) => PgConnectOptions::from_str(url),
            DatabaseConfig::Params { host, port, user, password, dbname } => Ok(
                PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .password(password)
                    .database(dbname),
            ),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %value, "Invalid value, falling back to default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_match_the_deployment_layout() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8081);
        assert_eq!(config.max_connections, 10);
        assert_eq!(
            config.database,
            DatabaseConfig::Params {
                host: "pgpool".into(),
                port: 5432,
                user: "customuser".into(),
                password: "custompassword".into(),
                dbname: "co".into(),
            }
        );
    }

    #[test]
    fn database_url_overrides_split_params() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://u:p@localhost/shop"),
            ("PG_HOST", "ignored"),
        ]);
        assert_eq!(
            config.database,
            DatabaseConfig::Url("postgres://u:p@localhost/shop".into())
        );
    }

    #[test]
    fn bad_numbers_fall_back_to_defaults() {
        let config = config_from(&[("PORT", "http"), ("PG_PORT", "-1"), ("HOST", "nope")]);
        assert_eq!(config.port, 8081);
        assert_eq!(config.listen_addr().ip(), IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        match config.database {
            DatabaseConfig::Params { port, .. } => assert_eq!(port, 5432),
            other => panic!("unexpected database config: {other:?}"),
        }
    }
}
