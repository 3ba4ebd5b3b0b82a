//! The fetch → clean → analyze pipeline
//!
//! [`Preprocessor`] is built once from the configuration and shared by the
//! HTTP handlers and the CLI. It holds no mutable state.

use crate::config::{AnalysisConfig, Config};
use crate::fetcher::{build_http_client, fetch_text};
use crate::text::{clean_gutenberg_text, compute_statistics_with, create_summary, StatisticsReport};
use crate::Result;
use reqwest::Client;
use serde::Serialize;

/// Result of running the full pipeline on a book
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedText {
    pub cleaned_text: String,
    pub statistics: StatisticsReport,
    pub summary: String,
}

/// Fetches, cleans and analyzes texts
#[derive(Debug, Clone)]
pub struct Preprocessor {
    client: Client,
    analysis: AnalysisConfig,
}

impl Preprocessor {
    /// Creates a preprocessor from the full configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = build_http_client(&config.fetch)?;

        Ok(Self::with_client(client, config.analysis.clone()))
    }

    /// Creates a preprocessor around an existing HTTP client
    pub fn with_client(client: Client, analysis: AnalysisConfig) -> Self {
        Self { client, analysis }
    }

    /// Analysis settings in effect
    pub fn analysis(&self) -> &AnalysisConfig {
        &self.analysis
    }

    /// Fetches a `.txt` URL and runs it through [`Preprocessor::process_text`]
    pub async fn process_url(&self, url: &str) -> Result<ProcessedText> {
        let raw_text = fetch_text(&self.client, url).await?;
        tracing::info!("Fetched {} characters from {}", raw_text.len(), url.trim());
        Ok(self.process_text(&raw_text))
    }

    /// Cleans raw Gutenberg text, then computes statistics and a summary of
    /// the cleaned text
    pub fn process_text(&self, raw_text: &str) -> ProcessedText {
        let cleaned_text = clean_gutenberg_text(raw_text);
        let statistics = self.analyze(&cleaned_text);
        let summary = create_summary(&cleaned_text, self.analysis.summary_sentences);

        ProcessedText {
            cleaned_text,
            statistics,
            summary,
        }
    }

    /// Computes statistics of `text` exactly as given
    pub fn analyze(&self, text: &str) -> StatisticsReport {
        compute_statistics_with(text, self.analysis.top_words)
    }
}
