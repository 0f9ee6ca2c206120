extern crate futures;
extern crate log;
extern crate regex;

use crate::{
    api::Judge,
    config::handle::{MAX_LEN, SEPARATOR},
};
use futures::future::join_all;
use log::{debug, warn};
use regex::Regex;
use std::fmt;

/// Splits the raw handle field. Order and repeats are kept.
pub fn parse_handles(raw: &str) -> Vec<String> {
    raw.split(SEPARATOR)
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleStatus {
    pub handle: String,
    pub valid: bool,
}
impl fmt::Display for HandleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.handle,
            if self.valid { "Valid" } else { "Invalid" }
        )
    }
}

/// Every checked handle, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validation {
    results: Vec<HandleStatus>,
}
impl Validation {
    pub fn results(&self) -> &[HandleStatus] {
        &self.results
    }
    pub fn valid(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|x| x.valid)
            .map(|x| x.handle.as_str())
    }
    pub fn invalid(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|x| !x.valid)
            .map(|x| x.handle.as_str())
    }
    pub fn all_valid(&self) -> bool {
        self.results.iter().all(|x| x.valid)
    }
    pub fn len(&self) -> usize {
        self.results.len()
    }
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

pub struct Validator {
    pattern: Regex,
}
impl Validator {
    pub fn new() -> Self {
        Validator {
            pattern: Regex::new(r"^[[:alnum:]_.\-]+$").unwrap(),
        }
    }
    /// Handles the judge could never accept are rejected without a request.
    pub fn is_well_formed(&self, handle: &str) -> bool {
        handle.len() <= MAX_LEN && self.pattern.is_match(handle)
    }
    async fn check<J: Judge + ?Sized>(&self, judge: &J, handle: String) -> HandleStatus {
        if !self.is_well_formed(&handle) {
            debug!("Rejecting malformed handle {:?}", handle);
            return HandleStatus {
                handle,
                valid: false,
            };
        }
        debug!("Checking handle {}", handle);
        let valid = match judge.user_exists(&handle).await {
            Ok(v) => v,
            Err(e) => {
                warn!("Error checking {}: {}", handle, e);
                false
            }
        };
        HandleStatus { handle, valid }
    }
    /// Checks all handles concurrently.
    pub async fn validate<J: Judge + ?Sized>(
        &self,
        judge: &J,
        handles: Vec<String>,
    ) -> Validation {
        Validation {
            results: join_all(handles.into_iter().map(|h| self.check(judge, h))).await,
        }
    }
}
impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
