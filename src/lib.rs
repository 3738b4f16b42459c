// src/lib.rs
pub mod company_analysis;
pub mod config;
pub mod tools;
pub mod web;

pub use company_analysis::{AnalysisReport, CompanyProfile};
pub use config::AppConfig;
pub use web::{build_rocket, start_web_server};
