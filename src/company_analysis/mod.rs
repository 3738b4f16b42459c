// src/company_analysis/mod.rs
//! Two-phase research pipeline: each URL is turned into a [`CompanyProfile`]
//! by the extractor, then both profiles feed one comparative call that
//! produces an [`AnalysisReport`].

pub mod agent;
pub mod deepseek_client;
pub mod error;
pub mod match_analyzer;
pub mod profile_extractor;
pub mod schemas;

pub use agent::{build_agent, ResearchTools};
pub use deepseek_client::DeepSeekClient;
pub use error::AnalysisError;
pub use match_analyzer::MatchAnalyzer;
pub use profile_extractor::ProfileExtractor;
pub use schemas::{AnalysisReport, CompanyProfile, StructuredRecord};
