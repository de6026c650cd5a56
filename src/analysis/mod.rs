mod catalog;
mod metrics;
mod query;
mod report;

pub use catalog::research_catalog;
pub use metrics::extract_metrics;
pub use query::{analyze_market_data, default_query, enhance_query};
pub use report::{build_insights, save_results, summarize_metrics};
