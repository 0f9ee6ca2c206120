extern crate serde;

use serde::{Deserialize, Serialize};
use std::{error::Error as StdError, fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    EmptyHandles,
    NotNumber(&'static str, String),
    Bounds(i32, i32),
    Locked,
}
impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHandles => f.write_str("Please enter at least one handle"),
            Self::NotNumber(field, value) => {
                write!(f, "Please enter a valid number for {}, got {:?}", field, value)
            }
            Self::Bounds(min, max) => write!(
                f,
                "Minimum rating {} should be less than or equal to maximum rating {}",
                min, max
            ),
            Self::Locked => f.write_str("Verify handles before fetching problems"),
        }
    }
}
impl StdError for InputError {}

/// Field values exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub handles: String,
    pub min_rating: String,
    pub max_rating: String,
    pub count: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub min: i32,
    pub max: i32,
    pub count: usize,
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, InputError> {
    value
        .trim()
        .parse()
        .map_err(|_| InputError::NotNumber(field, value.to_string()))
}

impl Form {
    pub fn request(&self) -> Result<Request, InputError> {
        let ret = Request {
            min: parse_field("minimum rating", &self.min_rating)?,
            max: parse_field("maximum rating", &self.max_rating)?,
            count: parse_field("problem count", &self.count)?,
        };
        if ret.min > ret.max {
            Err(InputError::Bounds(ret.min, ret.max))
        } else {
            Ok(ret)
        }
    }
}
