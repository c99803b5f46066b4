// src/models/money.rs
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Money in minor currency units (cents). Kept integral everywhere inside
/// the service; `to_display` is the single place it becomes a float.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(i64);

impl Money {
    pub const MINOR_PER_MAJOR: i64 = 100;

    pub const fn from_minor(units: i64) -> Self {
        Self(units)
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Fractional major units for JSON, e.g. `1999` -> `19.99`.
    pub fn to_display(self) -> f64 {
        self.0 as f64 / Self::MINOR_PER_MAJOR as f64
    }
}

impl From<i32> for Money {
    fn from(units: i32) -> Self {
        Self(i64::from(units))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Mul<i32> for Money {
    type Output = Money;

    fn mul(self, quantity: i32) -> Money {
        Money(self.0 * i64::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::default(), Add::add)
    }
}
