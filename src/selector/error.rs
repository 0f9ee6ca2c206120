use crate::{api, export, form, settings, storage};
use std::error::Error as StdError;

/// Errors the front end reports to the user.
pub trait Error: StdError + Send {}

impl Error for api::Error {}
impl Error for export::Error {}
impl Error for form::InputError {}
impl Error for settings::Error {}
impl Error for storage::Error {}
