pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod handles;
pub mod problem;
pub mod render;
pub mod select;
pub mod selector;
pub mod settings;
pub mod state;
pub mod storage;
