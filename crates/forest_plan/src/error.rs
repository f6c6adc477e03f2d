//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Every variant describes a defect in caller configuration: unknown category or
//! season names, malformed count ranges, non-positive seasonal multipliers, or
//! invalid planner settings. Unknown density tier names are not errors; they fall
//! back to [`crate::density::Density::Medium`].
use thiserror::Error;

use crate::category::Category;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown category '{name}'")]
    UnknownCategory { name: String },

    #[error("unknown season '{name}'")]
    UnknownSeason { name: String },

    #[error("invalid count range for {category}: [{min}, {max}]")]
    InvalidRange { category: Category, min: u32, max: u32 },

    #[error("invalid seasonal multiplier for {category}: {value} (must be finite and > 0)")]
    InvalidMultiplier { category: Category, value: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
