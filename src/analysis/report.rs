use super::metrics::extract_metrics;
use crate::models::{ExtractedMetrics, Insight, MetricSummary, SearchResponse, SearchResult};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_INSIGHTS: usize = 5;
const EXCERPT_CHARS: usize = 300;
const SUMMARY_ENTRIES: usize = 3;

pub fn build_insights(results: &[SearchResult]) -> Vec<Insight> {
    results
        .iter()
        .take(MAX_INSIGHTS)
        .enumerate()
        .map(|(idx, result)| Insight {
            index: idx + 1,
            excerpt: format!(
                "{}...",
                result.content.chars().take(EXCERPT_CHARS).collect::<String>()
            ),
            url: result.url.clone(),
        })
        .collect()
}

/// Summary cards read only the first result's metrics, capped at three
/// entries per card. Results after the first are scanned but ignored.
pub fn summarize_metrics(results: &[SearchResult]) -> Option<MetricSummary> {
    let all_metrics: Vec<ExtractedMetrics> = results
        .iter()
        .map(|result| extract_metrics(&result.content))
        .collect();

    let first = all_metrics.first()?;
    Some(MetricSummary {
        growth_rates: first.percentages.iter().take(SUMMARY_ENTRIES).cloned().collect(),
        market_values: first.currencies.iter().take(SUMMARY_ENTRIES).cloned().collect(),
        forecast_years: first.years.iter().take(SUMMARY_ENTRIES).cloned().collect(),
    })
}

/// Dumps the raw search response to `market_research_<YYYYMMDD_HHMMSS>.json`
/// in `output_dir`. One file per run, never read back.
pub fn save_results(response: &SearchResponse, output_dir: &Path) -> Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = output_dir.join(format!("market_research_{}.json", timestamp));

    let payload =
        serde_json::to_string(response).context("failed to serialize search response")?;
    fs::write(&path, payload)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}
