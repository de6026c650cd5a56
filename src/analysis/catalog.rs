use super::query::default_query;
use crate::models::{AnalysisType, ResearchCatalog};

pub const INDUSTRIES: [&str; 8] = [
    "Technology",
    "Healthcare",
    "Finance",
    "Retail",
    "Manufacturing",
    "Energy",
    "E-commerce",
    "Education",
];

pub const REGIONS: [&str; 7] = [
    "Global",
    "North America",
    "Europe",
    "Asia Pacific",
    "India",
    "China",
    "Middle East",
];

pub const EXAMPLE_QUERIES: [&str; 3] = [
    "Market share analysis of top e-commerce players in India",
    "Consumer behavior trends in digital payments 2024",
    "Sustainable business practices ROI analysis",
];

pub fn research_catalog() -> ResearchCatalog {
    ResearchCatalog {
        analysis_types: AnalysisType::ALL.into_iter().map(|t| t.to_string()).collect(),
        industries: INDUSTRIES.iter().map(|s| s.to_string()).collect(),
        regions: REGIONS.iter().map(|s| s.to_string()).collect(),
        example_queries: EXAMPLE_QUERIES.iter().map(|s| s.to_string()).collect(),
        default_query: default_query(AnalysisType::ALL[0], INDUSTRIES[0], REGIONS[0]),
    }
}
