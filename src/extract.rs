// src/extract.rs
use std::collections::HashMap;
use std::num::IntErrorKind;

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};

use crate::database::Pagination;
use crate::error::AppError;

/// Integer `{id}` path segment. Rejections come back as a JSON 400.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation("Invalid path"))?;
        parse_id(&raw).map(PathId)
    }
}

fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            AppError::validation("Id is out of range")
        }
        _ => AppError::validation("Id must be an integer"),
    })
}

/// `?limit=&offset=` never rejects; bad values become defaults.
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| params)
            .unwrap_or_default();

        Ok(Pagination::from_raw(
            params.get("limit").map(String::as_str),
            params.get("offset").map(String::as_str),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: AppError) -> String {
        err.to_string()
    }

    #[test]
    fn integer_ids_parse() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-3").unwrap(), -3);
    }

    #[test]
    fn non_integer_ids_are_rejected() {
        assert_eq!(message(parse_id("abc").unwrap_err()), "Id must be an integer");
        assert_eq!(message(parse_id("1.5").unwrap_err()), "Id must be an integer");
    }

    #[test]
    fn overflowing_ids_get_their_own_message() {
        assert_eq!(message(parse_id("99999999999").unwrap_err()), "Id is out of range");
        assert_eq!(message(parse_id("-99999999999").unwrap_err()), "Id is out of range");
    }
}
