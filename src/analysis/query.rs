use crate::models::{AnalysisType, SearchDepth, SearchRequest, SearchResponse};
use crate::tools::tavily::SearchProvider;
use tracing::{error, info};

const MAX_RESULTS: i32 = 15;

pub fn enhance_query(query: &str, analysis_type: AnalysisType) -> String {
    format!(
        "{} {} analysis market research data trends statistics",
        query, analysis_type
    )
}

/// The query the rendering layer pre-fills before the user edits anything.
pub fn default_query(analysis_type: AnalysisType, industry: &str, region: &str) -> String {
    format!("{} for {} industry in {}", analysis_type, industry, region)
}

/// Issues one advanced-depth search for the enhanced query. Provider errors
/// are absorbed here: the caller gets `None`, never the underlying error.
pub async fn analyze_market_data(
    provider: &dyn SearchProvider,
    query: &str,
    analysis_type: AnalysisType,
) -> Option<SearchResponse> {
    let enhanced_query = enhance_query(query, analysis_type);
    info!("Running {} search: {}", analysis_type, enhanced_query);

    let request = SearchRequest {
        query: enhanced_query,
        search_depth: SearchDepth::Advanced,
        max_results: MAX_RESULTS,
    };

    match provider.search(&request).await {
        Ok(response) => Some(response),
        Err(e) => {
            error!("Analysis failed: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchResult;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingProvider {
        seen: Mutex<Vec<SearchRequest>>,
    }

    impl RecordingProvider {
        fn new() -> Self {
            RecordingProvider {
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SearchProvider for RecordingProvider {
        async fn search(&self, request: &SearchRequest) -> anyhow::Result<SearchResponse> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(SearchResponse {
                results: vec![SearchResult {
                    title: "Report".to_string(),
                    url: "https://example.com/report".to_string(),
                    content: "Growth of 7% by 2026".to_string(),
                    score: 0.9,
                    extra: Default::default(),
                }],
                extra: Default::default(),
            })
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl SearchProvider for FailingProvider {
        async fn search(&self, _request: &SearchRequest) -> anyhow::Result<SearchResponse> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    #[test]
    fn enhanced_query_appends_label_and_suffix() {
        assert_eq!(
            enhance_query("EV batteries in Europe", AnalysisType::MarketSize),
            "EV batteries in Europe Market Size analysis market research data trends statistics"
        );
    }

    #[test]
    fn enhanced_query_keeps_an_empty_base_query() {
        assert_eq!(
            enhance_query("", AnalysisType::SwotAnalysis),
            " SWOT Analysis analysis market research data trends statistics"
        );
    }

    #[test]
    fn every_analysis_type_lands_in_the_query() {
        for analysis_type in AnalysisType::ALL {
            let enhanced = enhance_query("fintech", analysis_type);
            assert_eq!(
                enhanced,
                format!(
                    "fintech {} analysis market research data trends statistics",
                    analysis_type
                )
            );
        }
    }

    #[test]
    fn default_query_matches_the_prefill_template() {
        assert_eq!(
            default_query(AnalysisType::MarketSize, "Technology", "Global"),
            "Market Size for Technology industry in Global"
        );
    }

    #[tokio::test]
    async fn search_requests_advanced_depth_and_fifteen_results() {
        let provider = RecordingProvider::new();
        let response =
            analyze_market_data(&provider, "digital payments", AnalysisType::IndustryTrends)
                .await;
        assert!(response.is_some());

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].search_depth, SearchDepth::Advanced);
        assert_eq!(seen[0].max_results, 15);
        assert_eq!(
            seen[0].query,
            "digital payments Industry Trends analysis market research data trends statistics"
        );
    }

    #[tokio::test]
    async fn empty_query_still_issues_a_request() {
        let provider = RecordingProvider::new();
        analyze_market_data(&provider, "", AnalysisType::MarketShare).await;
        assert_eq!(provider.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn provider_error_becomes_the_no_result_sentinel() {
        let result =
            analyze_market_data(&FailingProvider, "anything", AnalysisType::RoiAnalysis).await;
        assert!(result.is_none());
    }
}
