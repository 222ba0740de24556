//! Person enrichment request/response payloads.

use serde::{Deserialize, Serialize};

/// A social or messaging profile identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    /// Service the profile belongs to, e.g. `twitter`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Username on that service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Full profile URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A structured person name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonName {
    /// Full display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
    /// Given (first) name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    /// Family (last) name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

/// A structured postal location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    /// First address line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    /// Second address line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// City
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Region or state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Request payload for `person.enrich`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonRequest {
    /// Email addresses identifying the person
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    /// Phone numbers identifying the person
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<String>,
    /// Social profiles identifying the person
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<Profile>,
    /// Structured name, used together with `location`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<PersonName>,
    /// Structured location, used together with `name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Previously mapped record identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// FullContact person identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    /// Partner-scoped identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    /// Webhook URL for asynchronous delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl PersonRequest {
    /// True when no queryable field is populated.
    pub fn is_empty(&self) -> bool {
        *self == PersonRequest::default()
    }
}

/// Response payload for `person.enrich`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonResponse {
    /// Full display name
    pub full_name: Option<String>,
    /// Age range bucket, e.g. `30-39`
    pub age_range: Option<String>,
    /// Gender
    pub gender: Option<String>,
    /// Free-form location string
    pub location: Option<String>,
    /// Job title
    pub title: Option<String>,
    /// Employer organization
    pub organization: Option<String>,
    /// Twitter profile URL
    pub twitter: Option<String>,
    /// LinkedIn profile URL
    pub linkedin: Option<String>,
    /// Facebook profile URL
    pub facebook: Option<String>,
    /// Short biography
    pub bio: Option<String>,
    /// Avatar image URL
    pub avatar: Option<String>,
    /// Personal website
    pub website: Option<String>,
    /// Last update timestamp, RFC 3339
    pub updated: Option<String>,
}
