extern crate serde;
extern crate serde_json;

use crate::{
    config::state::KEY,
    form::Form,
    problem::ProblemEntry,
    storage::{Error, Result, Store},
};
use serde::{Deserialize, Serialize};

/// The persisted snapshot, stored as camelCase JSON under one key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    pub usernames: String,
    pub min_rating: String,
    pub max_rating: String,
    pub num_questions: String,
    pub valid_usernames: Vec<String>,
    pub last_valid_input: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub form: Form,
    pub valid_handles: Vec<String>,
    pub last_valid_input: String,
    pub inputs_enabled: bool,
    /// Outcome of the last check of the handle field, `None` before any.
    pub handles_valid: Option<bool>,
    /// Last rendered problem list. Never persisted.
    pub selection: Vec<ProblemEntry>,
}

impl SessionState {
    pub fn record(&self) -> Record {
        Record {
            usernames: self.form.handles.clone(),
            min_rating: self.form.min_rating.clone(),
            max_rating: self.form.max_rating.clone(),
            num_questions: self.form.count.clone(),
            valid_usernames: self.valid_handles.clone(),
            last_valid_input: self.last_valid_input.clone(),
        }
    }
    pub fn from_record(record: Record) -> Self {
        let restored = !record.valid_usernames.is_empty();
        SessionState {
            form: Form {
                handles: record.usernames,
                min_rating: record.min_rating,
                max_rating: record.max_rating,
                count: record.num_questions,
            },
            valid_handles: record.valid_usernames,
            last_valid_input: record.last_valid_input,
            inputs_enabled: restored,
            handles_valid: if restored { Some(true) } else { None },
            selection: Vec::new(),
        }
    }

    pub fn save<S: Store + ?Sized>(&self, store: &mut S) -> Result<()> {
        store.set(
            KEY,
            serde_json::to_string(&self.record()).map_err(Error::Json)?,
        )
    }
    pub fn load<S: Store + ?Sized>(store: &S) -> Result<Option<Self>> {
        match store.get(KEY)? {
            Some(v) => Ok(Some(Self::from_record(
                serde_json::from_str(&v).map_err(Error::Json)?,
            ))),
            None => Ok(None),
        }
    }
    pub fn clear<S: Store + ?Sized>(store: &mut S) -> Result<()> {
        store.remove(KEY)
    }
}
