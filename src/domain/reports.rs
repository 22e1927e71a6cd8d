//! Response shapes returned by the analytics backend.
//!
//! None of these are applied automatically. Callers that want a typed view
//! call [`ResponseEnvelope::decode`](crate::domain::model::ResponseEnvelope::decode)
//! with the record they expect. Every field the backend may omit carries
//! `#[serde(default)]` so older servers still decode.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---- corporate ----

/// Body of `POST /corporate/resolve`. An unknown company comes back with
/// `resolved: false`, the queried name in `company_name` and an `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveCompanyResponse {
    pub resolved: bool,
    #[serde(default)]
    pub query_company: Option<String>,
    #[serde(default)]
    pub query_company_id: Option<String>,
    #[serde(default)]
    pub query_company_type: Option<String>,
    #[serde(default)]
    pub ultimate_parent_id: Option<String>,
    #[serde(default)]
    pub ultimate_parent_name: Option<String>,
    #[serde(default)]
    pub subsidiary_count: u32,
    #[serde(default)]
    pub subsidiaries: Vec<String>,
    #[serde(default)]
    pub total_patents: u32,
    #[serde(default)]
    pub patent_ids: Vec<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub confidence_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default = "default_company_type")]
    pub company_type: String,
    #[serde(default)]
    pub jurisdiction: String,
    #[serde(default)]
    pub patent_count: u32,
}

fn default_company_type() -> String {
    "corporation".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnershipEdge {
    #[serde(rename = "from")]
    pub from_company_id: String,
    #[serde(rename = "to")]
    pub to_company_id: String,
    pub ownership_percentage: f64,
    #[serde(default)]
    pub source: String,
}

/// Body of `GET /corporate/graph/{id}`. An unknown id yields only `error`
/// and a zero confidence, which decodes to an empty graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnershipGraph {
    #[serde(default)]
    pub company_id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub nodes: Vec<CompanyNode>,
    #[serde(default)]
    pub edges: Vec<OwnershipEdge>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub confidence_score: f64,
}

/// The analysis endpoints (FTO, prior art, landscape) wrap their report
/// together with the agent's confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse<R> {
    pub report: R,
    #[serde(default)]
    pub confidence_score: f64,
}

pub type FtoAnalysisResponse = AnalysisResponse<FtoReport>;
pub type ValidityAnalysisResponse = AnalysisResponse<ValidityReport>;
pub type LandscapeAnalysisResponse = AnalysisResponse<LandscapeReport>;

// ---- patents ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub number: u32,
    #[serde(rename = "type")]
    pub claim_type: String,
    #[serde(default)]
    pub depends_on: Option<u32>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub system: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventor {
    pub name: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patent {
    pub id: String,
    pub source: String,
    pub publication_number: String,
    pub title: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub claims: Vec<Claim>,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub inventors: Vec<Inventor>,
    #[serde(default)]
    pub filing_date: Option<NaiveDate>,
    #[serde(default)]
    pub publication_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub classifications: Vec<Classification>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub jurisdictions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatentSearchResults {
    pub query: String,
    #[serde(default)]
    pub results: Vec<Patent>,
    #[serde(default)]
    pub total: usize,
}

// ---- fto ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimMatch {
    pub patent_id: String,
    pub claim_number: u32,
    #[serde(default)]
    pub claim_text: String,
    pub similarity_score: f64,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    pub risk_level: String,
    #[serde(default)]
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfringementAnalysis {
    pub patent_id: String,
    #[serde(default)]
    pub patent_title: String,
    #[serde(default)]
    pub assignee: String,
    pub overall_risk: String,
    #[serde(default)]
    pub claim_matches: Vec<ClaimMatch>,
    #[serde(default)]
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FtoReport {
    pub product_description: String,
    #[serde(default)]
    pub target_markets: Vec<String>,
    #[serde(default)]
    pub analyses: Vec<InfringementAnalysis>,
    #[serde(default)]
    pub overall_risk: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub high_risk_count: u32,
    #[serde(default)]
    pub medium_risk_count: u32,
    #[serde(default)]
    pub low_risk_count: u32,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

// ---- products ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMatch {
    pub patent_id: String,
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub manufacturer: String,
    pub confidence_score: f64,
    #[serde(default)]
    pub matching_claims: Vec<u32>,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
}

/// Body of `POST /products/match`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductMatchResponse {
    #[serde(default)]
    pub patent_id: Option<String>,
    #[serde(default)]
    pub matches: Vec<ProductMatch>,
    #[serde(default)]
    pub total_matches: u32,
    #[serde(default)]
    pub confidence_score: f64,
}

// ---- validity ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorArtAnalysis {
    pub prior_art_id: String,
    pub target_patent_id: String,
    pub relevance_score: f64,
    #[serde(default)]
    pub matched_claims: Vec<u32>,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    #[serde(default)]
    pub analysis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidityReport {
    pub target_patent_id: String,
    #[serde(default)]
    pub target_patent_title: String,
    #[serde(default)]
    pub prior_art_results: Vec<PriorArtAnalysis>,
    #[serde(default)]
    pub overall_validity: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub strongest_prior_art: Option<String>,
}

// ---- landscape ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatentCluster {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub patent_ids: Vec<String>,
    #[serde(default)]
    pub density: f64,
    #[serde(default)]
    pub classification_codes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhiteSpace {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub adjacent_clusters: Vec<String>,
    #[serde(default)]
    pub opportunity_score: f64,
    #[serde(default)]
    pub suggested_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOpportunity {
    pub white_space: WhiteSpace,
    pub rank: u32,
    #[serde(default)]
    pub rationale: String,
    #[serde(default = "default_intensity")]
    pub competitive_intensity: String,
}

fn default_intensity() -> String {
    "medium".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandscapeReport {
    pub domain: String,
    #[serde(default)]
    pub clusters: Vec<PatentCluster>,
    #[serde(default)]
    pub white_spaces: Vec<WhiteSpace>,
    #[serde(default)]
    pub opportunities: Vec<RankedOpportunity>,
    #[serde(default)]
    pub total_patents_analyzed: u32,
    #[serde(default)]
    pub summary: String,
}

// ---- health ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub stores: HashMap<String, u64>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
