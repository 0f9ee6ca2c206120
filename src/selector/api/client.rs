extern crate log;
extern crate reqwest;
extern crate serde;

use super::{
    error::{builder_error, decode_error, network_error, Result},
    response::{Envelope, ProblemSet},
    Judge,
};
use crate::{
    problem::{Problem, Submission},
    settings::Settings,
};
use async_trait::async_trait;
use log::debug;
use reqwest::Proxy;
use serde::de::{DeserializeOwned, IgnoredAny};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct Client {
    client: reqwest::Client,
    api_url: String,
    submission_from: usize,
    submission_count: usize,
}
impl Client {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(p) = &settings.proxy {
            builder = builder.proxy(Proxy::https(p.as_str()).map_err(builder_error)?);
        }
        Ok(Client {
            client: builder.build().map_err(builder_error)?,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            submission_from: settings.submission_from,
            submission_count: settings.submission_count,
        })
    }

    /// Failed envelopes come with a 4xx status, so the body is decoded
    /// regardless of the status code.
    async fn call<T: DeserializeOwned>(&self, method: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.api_url, method);
        debug!("GET {} {:?}", url, query);
        self.client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(network_error)?
            .json::<Envelope<T>>()
            .await
            .map_err(decode_error)?
            .into_result()
    }
}

#[async_trait]
impl Judge for Client {
    async fn user_exists(&self, handle: &str) -> Result<bool> {
        match self
            .call::<Vec<IgnoredAny>>(
                "user.info",
                &[("handles", handle), ("checkHistoricHandles", "false")],
            )
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.is_api() => {
                debug!("user.info rejected {}: {}", handle, e);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
    async fn problems(&self, tag: &str) -> Result<Vec<Problem>> {
        Ok(self
            .call::<ProblemSet>("problemset.problems", &[("tags", tag)])
            .await?
            .problems)
    }
    async fn submissions(&self, handle: &str) -> Result<Vec<Submission>> {
        let from = self.submission_from.to_string();
        let count = self.submission_count.to_string();
        self.call::<Vec<Submission>>(
            "user.status",
            &[
                ("handle", handle),
                ("from", from.as_str()),
                ("count", count.as_str()),
            ],
        )
        .await
    }
}
