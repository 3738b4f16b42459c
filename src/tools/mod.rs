// src/tools/mod.rs
pub mod report_writer;
pub mod web_search;

pub use report_writer::{save_report, DEFAULT_REPORT_FILENAME};
pub use web_search::{SearchHit, WebSearchTool};
