extern crate reqwest;

use std::{boxed::Box, convert::Into, error::Error as StdError, fmt, result::Result as StdResult};

#[derive(Debug)]
pub struct Error(Box<Inner>);
#[derive(Debug)]
pub(super) enum Kind {
    Builder(reqwest::Error),
    Network(reqwest::Error),
    Decode(reqwest::Error),
    Api,
}
#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::Builder(err) => write!(f, "Error building client: {}", err),
            Kind::Network(err) => write!(f, "Error sending request: {}", err),
            Kind::Decode(err) => write!(f, "Error decoding response: {}", err),
            Kind::Api => {
                write!(f, "API request failed")?;
                self.write_description(f)
            }
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Builder(x) | Kind::Network(x) | Kind::Decode(x) => Some(x),
            Kind::Api => None,
        }
    }
}
impl Error {
    fn new(inner: Inner) -> Self {
        Self(Box::new(inner))
    }
    pub(super) fn with_kind(kind: Kind) -> Self {
        Self::new(Inner {
            kind,
            description: None,
        })
    }
    pub(super) fn with_description<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self::new(Inner {
            kind,
            description: Some(description.into()),
        })
    }
    /// Same error a `FAILED` envelope with this comment produces.
    pub fn failed<T: Into<String>>(comment: T) -> Self {
        Self::with_description(Kind::Api, comment)
    }
    /// The server answered with a `FAILED` envelope.
    pub fn is_api(&self) -> bool {
        matches!(self.0.kind, Kind::Api)
    }
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }
    fn write_description(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(d) = &self.0.description {
            write!(f, ": {}", d)
        } else {
            Ok(())
        }
    }
}

pub(super) fn builder_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Builder(err))
}
pub(super) fn network_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Network(err))
}
pub(super) fn decode_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Decode(err))
}
pub(super) fn api_error(comment: Option<String>) -> Error {
    Error::new(Inner {
        kind: Kind::Api,
        description: comment,
    })
}
