extern crate serde;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProblemKey {
    pub contest: Option<u32>,
    pub index: String,
}
impl fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.contest {
            Some(c) => write!(f, "{}{}", c, self.index),
            None => write!(f, "{}", self.index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub contest_id: Option<u32>,
    pub index: String,
    pub name: String,
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
}
impl Problem {
    pub fn key(&self) -> ProblemKey {
        ProblemKey {
            contest: self.contest_id,
            index: self.index.clone(),
        }
    }
    pub fn link(&self, base: &str) -> String {
        match self.contest_id {
            Some(c) => format!("{}/{}/{}", base, c, self.index),
            None => format!("{}/{}", base, self.index),
        }
    }
    pub fn entry(&self, base: &str) -> ProblemEntry {
        ProblemEntry {
            name: self.name.clone(),
            rating: self.rating,
            link: self.link(base),
        }
    }
}
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub id: u64,
    pub problem: Problem,
    pub verdict: Option<String>,
}
impl Submission {
    /// Verdict is absent while the submission is still being judged.
    pub fn accepted(&self) -> bool {
        self.verdict.as_deref() == Some("OK")
    }
}

/// A problem as handed to a rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemEntry {
    pub name: String,
    pub rating: Option<i32>,
    pub link: String,
}
impl fmt::Display for ProblemEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rating {
            Some(r) => write!(f, "{} (Rating: {})", self.name, r),
            None => write!(f, "{} (Unrated)", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::api::PROBLEM_URL;

    #[test]
    fn decodes_catalog_problem() {
        let p: Problem = serde_json::from_str(
            r#"{"contestId":1850,"index":"A","name":"To My Critics","type":"PROGRAMMING","rating":800,"tags":["implementation","sortings"]}"#,
        )
        .unwrap();
        assert_eq!(p.contest_id, Some(1850));
        assert_eq!(p.rating, Some(800));
        assert_eq!(p.key().to_string(), "1850A");
        assert_eq!(
            p.link(PROBLEM_URL),
            "https://codeforces.com/problemset/problem/1850/A"
        );
    }

    #[test]
    fn unrated_problem_has_no_rating() {
        let p: Problem =
            serde_json::from_str(r#"{"contestId":2000,"index":"H","name":"Ksyusha","tags":[]}"#)
                .unwrap();
        assert_eq!(p.rating, None);
        assert_eq!(p.entry(PROBLEM_URL).to_string(), "Ksyusha (Unrated)");
    }

    #[test]
    fn entry_display_matches_list_format() {
        let entry = ProblemEntry {
            name: "Watermelon".to_string(),
            rating: Some(800),
            link: format!("{}/4/A", PROBLEM_URL),
        };
        assert_eq!(entry.to_string(), "Watermelon (Rating: 800)");
    }

    #[test]
    fn submission_accepted_only_on_ok() {
        let s: Submission = serde_json::from_str(
            r#"{"id":1,"contestId":4,"problem":{"contestId":4,"index":"A","name":"Watermelon"},"verdict":"OK"}"#,
        )
        .unwrap();
        assert!(s.accepted());
        let s: Submission = serde_json::from_str(
            r#"{"id":2,"problem":{"contestId":4,"index":"A","name":"Watermelon"},"verdict":"WRONG_ANSWER"}"#,
        )
        .unwrap();
        assert!(!s.accepted());
        let s: Submission = serde_json::from_str(
            r#"{"id":3,"problem":{"contestId":4,"index":"A","name":"Watermelon"}}"#,
        )
        .unwrap();
        assert!(!s.accepted());
    }
}
