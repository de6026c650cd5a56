use crate::models::ExtractedMetrics;
use regex::Regex;
use std::sync::LazyLock;

static PERCENTAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?%").unwrap());
static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[$₹€£](\d+(?:,\d{3})*(?:\.\d+)?)").unwrap());
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b20\d{2}\b").unwrap());

/// Scans free text for percentages, currency amounts and 20xx years.
/// Matches come back in order of occurrence, duplicates included; the
/// currency symbol is not part of the captured amount.
pub fn extract_metrics(content: &str) -> ExtractedMetrics {
    let percentages = PERCENTAGE_RE
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect();
    let currencies = CURRENCY_RE
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect();
    let years = YEAR_RE
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect();

    ExtractedMetrics {
        percentages,
        currencies,
        years,
    }
}
