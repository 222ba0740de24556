//! Company enrichment and search payloads.

use serde::{Deserialize, Serialize};

/// Request payload for `company.enrich` and `company.search`.
///
/// Enrichment looks up by `domain`; search looks up by `name` with the
/// remaining fields narrowing the result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyRequest {
    /// Company domain, the enrichment lookup key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Company name, the search lookup key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form location filter for search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Locality (city) filter for search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    /// Region (state) filter for search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Country filter for search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Result ordering hint for search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Webhook URL for asynchronous delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// Response payload for `company.enrich`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyResponse {
    /// Company name
    pub name: Option<String>,
    /// Headquarters location
    pub location: Option<String>,
    /// Twitter profile URL
    pub twitter: Option<String>,
    /// LinkedIn profile URL
    pub linkedin: Option<String>,
    /// Company description
    pub bio: Option<String>,
    /// Logo image URL
    pub logo: Option<String>,
    /// Company website
    pub website: Option<String>,
    /// Year founded
    pub founded: Option<u32>,
    /// Approximate employee count
    pub employees: Option<u32>,
    /// Locale code
    pub locale: Option<String>,
    /// Industry category
    pub category: Option<String>,
    /// Last update timestamp, RFC 3339
    pub updated: Option<String>,
}

/// One entry in a `company.search` result list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanySearchResult {
    /// Domain to feed back into `company.enrich`
    pub lookup_domain: Option<String>,
    /// Matched organization name
    pub org_name: Option<String>,
    /// Logo image URL
    pub logo: Option<String>,
    /// Headquarters location
    pub location: Option<String>,
}
