//! Identity resolution payloads (`identity.map`, `identity.resolve`,
//! `identity.delete`).

use super::person::{Location, PersonName, Profile};
use serde::{Deserialize, Serialize};

/// Request payload shared by the three identity endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolveRequest {
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
    /// Caller-assigned record identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// FullContact person identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    /// Partner-scoped identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
}

impl ResolveRequest {
    /// True when at least one identifier field is populated.
    pub fn has_identifier(&self) -> bool {
        !self.emails.is_empty()
            || !self.phones.is_empty()
            || !self.profiles.is_empty()
            || (self.name.is_some() && self.location.is_some())
            || self.record_id.is_some()
            || self.person_id.is_some()
            || self.partner_id.is_some()
    }
}

/// Response payload shared by the three identity endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolveResponse {
    /// Caller-assigned record identifiers mapped to this identity
    pub record_ids: Vec<String>,
    /// FullContact person identifiers
    pub person_ids: Vec<String>,
    /// Partner-scoped identifiers
    pub partner_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_identifier() {
        assert!(!ResolveRequest::default().has_identifier());

        let by_email = ResolveRequest {
            emails: vec!["bart@fullcontact.com".to_string()],
            ..Default::default()
        };
        assert!(by_email.has_identifier());

        // name without location does not identify on its own
        let name_only = ResolveRequest {
            name: Some(PersonName {
                full: Some("Bart Lorang".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(!name_only.has_identifier());
    }

    #[test]
    fn test_resolve_response_defaults_to_empty_lists() {
        let response: ResolveResponse = serde_json::from_str("{}").unwrap();
        assert!(response.record_ids.is_empty());
        assert!(response.person_ids.is_empty());
        assert!(response.partner_ids.is_empty());
    }
}
