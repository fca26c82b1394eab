use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

/// Result ordering policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending, case-insensitive lab name. Default, and the tie-break for
    /// every policy that does not fully order.
    Name,
    /// Descending date of issue; unparsable dates compare equal.
    Date,
    /// Labs whose name contains the query rank first, then name order.
    Relevance,
}

impl SortKey {
    /// Unknown values fall back to name ordering.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "date" => SortKey::Date,
            "relevance" => SortKey::Relevance,
            _ => SortKey::Name,
        }
    }
}

/// A validated search request. All defaulting and clamping happens at
/// construction, so the pipeline can assume sane values.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Trimmed free-text query; empty means no text filter.
    pub query: String,
    pub state: Option<String>,
    pub city: Option<String>,
    /// Canonical categories, OR-combined within this filter.
    pub disciplines: Vec<String>,
    /// 1-based.
    pub page: usize,
    pub limit: usize,
    pub sort: SortKey,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            state: None,
            city: None,
            disciplines: Vec::new(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            sort: SortKey::Name,
        }
    }
}

impl SearchRequest {
    /// Builds a request from raw query-string pairs.
    ///
    /// Pairs are used instead of a typed extractor so the repeatable
    /// `disciplines` parameter survives. `page` floors at 1, `limit` clamps
    /// to [1, 100], unparsable numbers keep their defaults, and blank
    /// `state`/`city` values count as absent.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut request = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "query" => request.query = value.trim().to_string(),
                "state" => {
                    let value = value.trim();
                    request.state = (!value.is_empty()).then(|| value.to_string());
                }
                "city" => {
                    let value = value.trim();
                    request.city = (!value.is_empty()).then(|| value.to_string());
                }
                "disciplines" => {
                    let value = value.trim();
                    if !value.is_empty() {
                        request.disciplines.push(value.to_string());
                    }
                }
                "page" => {
                    if let Ok(page) = value.trim().parse::<i64>() {
                        request.page = page.max(1) as usize;
                    }
                }
                "limit" => {
                    if let Ok(limit) = value.trim().parse::<i64>() {
                        request.limit = limit.clamp(1, MAX_PAGE_SIZE as i64) as usize;
                    }
                }
                "sortBy" => request.sort = SortKey::parse(value.trim()),
                _ => {}
            }
        }

        request
    }
}

/// A cleaned lab as returned to the client. The stored `isActive` flag is
/// internal housekeeping and has no field here, so it can never leak.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabEntry {
    pub id: u64,
    pub lab_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact_person: String,
    pub contact_number: String,
    pub email_id: String,
    pub discipline: String,
    pub certificate_no: String,
    pub date_of_issue: String,
    pub date_of_expiry: String,
}

/// The facet lists driving the client-side filter controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    pub states: Vec<String>,
    pub cities: Vec<String>,
    pub disciplines: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub labs: Vec<LabEntry>,
    pub total_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub filters: FilterOptions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
