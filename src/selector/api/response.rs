extern crate serde;

use super::error::{api_error, Error, Kind, Result};
use crate::problem::Problem;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub(super) enum Status {
    Ok,
    Failed,
}

#[derive(Debug, Deserialize)]
pub(super) struct Envelope<T> {
    status: Status,
    comment: Option<String>,
    result: Option<T>,
}
impl<T> Envelope<T> {
    pub(super) fn into_result(self) -> Result<T> {
        match (self.status, self.result) {
            (Status::Ok, Some(v)) => Ok(v),
            (Status::Ok, None) => Err(Error::with_description(
                Kind::Api,
                "Response has no result",
            )),
            (Status::Failed, _) => Err(api_error(self.comment)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ProblemSet {
    pub(super) problems: Vec<Problem>,
}
