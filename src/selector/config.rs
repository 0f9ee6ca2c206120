pub mod api {
    pub const API_URL: &str = "https://codeforces.com/api";
    pub const PROBLEM_URL: &str = "https://codeforces.com/problemset/problem";
    pub const TAG: &str = "implementation";
    pub const SUBMISSION_FROM: usize = 1;
    pub const SUBMISSION_COUNT: usize = 1000;
}
pub mod handle {
    pub const SEPARATOR: char = ';';
    pub const MAX_LEN: usize = 24;
}
pub mod state {
    pub const KEY: &str = "cfProblemSelectorState";
    pub const FILE: &str = "cf-selector.json";
}
