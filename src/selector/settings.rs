extern crate serde;
extern crate serde_yaml;

use crate::config::api::{API_URL, PROBLEM_URL, SUBMISSION_COUNT, SUBMISSION_FROM, TAG};
use serde::Deserialize;
use std::{
    error::Error as StdError,
    fmt,
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Yaml(serde_yaml::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Error reading settings: {}", e),
            Self::Yaml(e) => write!(f, "Error parsing settings: {}", e),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Yaml(e) => Some(e),
        }
    }
}

/// Runtime overrides of the compiled-in API constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_url: String,
    pub problem_url: String,
    pub tag: String,
    pub submission_from: usize,
    pub submission_count: usize,
    pub proxy: Option<String>,
    /// Handlebars template used by `export`.
    pub template: Option<PathBuf>,
}
impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: API_URL.to_string(),
            problem_url: PROBLEM_URL.to_string(),
            tag: TAG.to_string(),
            submission_from: SUBMISSION_FROM,
            submission_count: SUBMISSION_COUNT,
            proxy: None,
            template: None,
        }
    }
}

pub fn from_reader<R: Read>(rdr: R) -> Result<Settings, Error> {
    serde_yaml::from_reader(rdr).map_err(Error::Yaml)
}
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Settings, Error> {
    from_reader(File::open(path).map_err(Error::Io)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let s = from_reader("tag: math\nproxy: http://127.0.0.1:8080\n".as_bytes()).unwrap();
        assert_eq!(s.tag, "math");
        assert_eq!(s.proxy.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(s.api_url, API_URL);
        assert_eq!(s.submission_count, SUBMISSION_COUNT);
        assert_eq!(s.template, None);
    }

    #[test]
    fn malformed_file_is_rejected() {
        assert!(matches!(
            from_reader("submission_count: lots\n".as_bytes()),
            Err(Error::Yaml(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            from_path("/nonexistent/cf-selector.yaml"),
            Err(Error::Io(_))
        ));
    }
}
