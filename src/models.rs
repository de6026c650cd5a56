use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisType {
    #[serde(rename = "Market Size")]
    MarketSize,
    #[serde(rename = "Competitor Analysis")]
    CompetitorAnalysis,
    #[serde(rename = "Consumer Behavior")]
    ConsumerBehavior,
    #[serde(rename = "Industry Trends")]
    IndustryTrends,
    #[serde(rename = "SWOT Analysis")]
    SwotAnalysis,
    #[serde(rename = "Growth Forecast")]
    GrowthForecast,
    #[serde(rename = "Market Share")]
    MarketShare,
    #[serde(rename = "ROI Analysis")]
    RoiAnalysis,
}

impl AnalysisType {
    pub const ALL: [AnalysisType; 8] = [
        AnalysisType::MarketSize,
        AnalysisType::CompetitorAnalysis,
        AnalysisType::ConsumerBehavior,
        AnalysisType::IndustryTrends,
        AnalysisType::SwotAnalysis,
        AnalysisType::GrowthForecast,
        AnalysisType::MarketShare,
        AnalysisType::RoiAnalysis,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisType::MarketSize => "Market Size",
            AnalysisType::CompetitorAnalysis => "Competitor Analysis",
            AnalysisType::ConsumerBehavior => "Consumer Behavior",
            AnalysisType::IndustryTrends => "Industry Trends",
            AnalysisType::SwotAnalysis => "SWOT Analysis",
            AnalysisType::GrowthForecast => "Growth Forecast",
            AnalysisType::MarketShare => "Market Share",
            AnalysisType::RoiAnalysis => "ROI Analysis",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    Basic,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub search_depth: SearchDepth,
    pub max_results: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub query: String,
    pub analysis_type: AnalysisType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis_id: String,
    pub query: String,
    pub analysis_type: AnalysisType,
    pub enhanced_query: String,
    pub insights: Vec<Insight>,
    pub metric_summary: Option<MetricSummary>,
    pub results: Vec<SearchResult>,
    pub saved_to: Option<String>,
    pub total_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub index: usize,
    pub excerpt: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub growth_rates: Vec<String>,
    pub market_values: Vec<String>,
    pub forecast_years: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedMetrics {
    pub percentages: Vec<String>,
    pub currencies: Vec<String>,
    pub years: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchCatalog {
    pub analysis_types: Vec<String>,
    pub industries: Vec<String>,
    pub regions: Vec<String>,
    pub example_queries: Vec<String>,
    pub default_query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_type_serializes_to_its_label() {
        assert_eq!(
            serde_json::to_string(&AnalysisType::SwotAnalysis).unwrap(),
            "\"SWOT Analysis\""
        );
        assert_eq!(
            serde_json::from_str::<AnalysisType>("\"ROI Analysis\"").unwrap(),
            AnalysisType::RoiAnalysis
        );
    }

    #[test]
    fn search_depth_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SearchDepth::Advanced).unwrap(),
            "\"advanced\""
        );
        assert_eq!(
            serde_json::to_string(&SearchDepth::Basic).unwrap(),
            "\"basic\""
        );
    }

    #[test]
    fn search_response_keeps_provider_extras() {
        let raw = r#"{
            "query": "ev batteries",
            "results": [{"title": "T", "url": "https://example.com", "content": "c", "score": 0.92}],
            "response_time": 0.41
        }"#;
        let response: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.results.len(), 1);
        assert!(response.extra.contains_key("query"));
        assert!(response.extra.contains_key("response_time"));

        let round_tripped = serde_json::to_value(&response).unwrap();
        assert_eq!(round_tripped["response_time"], 0.41);
    }

    #[test]
    fn search_result_defaults_missing_fields() {
        let result: SearchResult =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(result.title, "");
        assert_eq!(result.content, "");
        assert_eq!(result.score, 0.0);
    }
}
