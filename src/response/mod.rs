//! Terminal response classification: raw HTTP outcome → typed [`ApiResponse`].

use crate::errors::{FcResult, FullContactError};
use crate::transport::HttpResponse;
use crate::types::{CompanyResponse, CompanySearchResult, PersonResponse, ResolveResponse};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use url::Url;

/// Response header that overrides which kind's classification rule applies.
///
/// Lets test doubles simulate any response shape against any endpoint; the
/// value names an endpoint path (or a full endpoint URL).
pub const FC_TEST_TYPE_HEADER: &str = "fc-rust-client-test-type";

/// The six call types, each mapped 1:1 to an endpoint path and a
/// classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// `person.enrich`
    PersonEnrich,
    /// `company.enrich`
    CompanyEnrich,
    /// `company.search`
    CompanySearch,
    /// `identity.map`
    IdentityMap,
    /// `identity.resolve`
    IdentityResolve,
    /// `identity.delete`
    IdentityDelete,
}

impl RequestKind {
    /// All kinds, in endpoint order.
    pub const ALL: [RequestKind; 6] = [
        RequestKind::PersonEnrich,
        RequestKind::CompanyEnrich,
        RequestKind::CompanySearch,
        RequestKind::IdentityMap,
        RequestKind::IdentityResolve,
        RequestKind::IdentityDelete,
    ];

    /// Endpoint path under the API base URL.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            RequestKind::PersonEnrich => "/v3/person.enrich",
            RequestKind::CompanyEnrich => "/v3/company.enrich",
            RequestKind::CompanySearch => "/v3/company.search",
            RequestKind::IdentityMap => "/v3/identity.map",
            RequestKind::IdentityResolve => "/v3/identity.resolve",
            RequestKind::IdentityDelete => "/v3/identity.delete",
        }
    }

    /// Full endpoint URL for this kind.
    pub fn url(&self, base: &Url) -> FcResult<Url> {
        base.join(self.endpoint_path()).map_err(Into::into)
    }

    /// Parse a test-type header value back into a kind.
    ///
    /// Accepts a bare endpoint path or a full URL ending in one.
    pub fn from_test_header(value: &str) -> Option<RequestKind> {
        RequestKind::ALL
            .into_iter()
            .find(|kind| value.ends_with(kind.endpoint_path()))
    }

    /// Whether a status code is a defined business outcome for this kind.
    ///
    /// 404 means "call succeeded, no match" on every kind; 202 is the
    /// webhook-accepted status on the enrich/search family, 204 the empty
    /// success on the resolve family.
    pub fn is_success(&self, status: u16) -> bool {
        match self {
            RequestKind::PersonEnrich
            | RequestKind::CompanyEnrich
            | RequestKind::CompanySearch => matches!(status, 200 | 202 | 404),
            RequestKind::IdentityMap
            | RequestKind::IdentityResolve
            | RequestKind::IdentityDelete => matches!(status, 200 | 204 | 404),
        }
    }
}

/// Terminal outcome of one dispatched call, delivered exactly once.
///
/// `error` and a populated payload are mutually exclusive; a successfully
/// parsed empty body is a zero-value payload with no error.
#[derive(Debug, Default)]
pub struct ApiResponse {
    /// Business-success flag derived from the status code per kind
    pub is_successful: bool,
    /// HTTP status code; `None` when no response was received
    pub status_code: Option<u16>,
    /// Terminal error, if the call failed locally or at the transport
    pub error: Option<FullContactError>,
    /// Payload for person enrich calls
    pub person: Option<PersonResponse>,
    /// Payload for company enrich calls
    pub company: Option<CompanyResponse>,
    /// Payload for company search calls
    pub company_search: Option<Vec<CompanySearchResult>>,
    /// Payload for identity map/resolve/delete calls
    pub resolve: Option<ResolveResponse>,
}

impl ApiResponse {
    /// Outcome carrying only an error (validation, transport, construction).
    pub(crate) fn from_error(error: FullContactError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }
}

/// Classify the terminal raw result of a dispatch into a typed outcome.
///
/// The kind is taken from the originating endpoint unless the response
/// carries the [`FC_TEST_TYPE_HEADER`] override.
pub(crate) fn classify(kind: RequestKind, result: FcResult<HttpResponse>) -> ApiResponse {
    let response = match result {
        Ok(response) => response,
        Err(error) => return ApiResponse::from_error(error),
    };

    let kind = response
        .headers
        .get(FC_TEST_TYPE_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(RequestKind::from_test_header)
        .unwrap_or(kind);

    let mut outcome = ApiResponse {
        status_code: Some(response.status),
        ..Default::default()
    };

    let decoded = match kind {
        RequestKind::PersonEnrich => {
            decode::<PersonResponse>(&response.body).map(|p| outcome.person = Some(p))
        }
        RequestKind::CompanyEnrich => {
            decode::<CompanyResponse>(&response.body).map(|c| outcome.company = Some(c))
        }
        RequestKind::CompanySearch => decode::<Vec<CompanySearchResult>>(&response.body)
            .map(|list| outcome.company_search = Some(list)),
        RequestKind::IdentityMap | RequestKind::IdentityResolve | RequestKind::IdentityDelete => {
            decode::<ResolveResponse>(&response.body).map(|r| outcome.resolve = Some(r))
        }
    };

    match decoded {
        Ok(()) => outcome.is_successful = kind.is_success(response.status),
        Err(error) => outcome.error = Some(error),
    }

    outcome
}

/// Deserialize a body into `T`; an empty body is the zero value.
fn decode<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, FullContactError> {
    if body.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| FullContactError::Deserialization {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use http::{HeaderMap, HeaderValue};
    use test_case::test_case;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: HeaderMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn test_kind_url_mapping_is_one_to_one() {
        let base = Url::parse("https://api.fullcontact.com").unwrap();
        for kind in RequestKind::ALL {
            let url = kind.url(&base).unwrap();
            assert!(url.path().starts_with("/v3/"));
            assert_eq!(RequestKind::from_test_header(url.as_str()), Some(kind));
        }
    }

    #[test_case(RequestKind::PersonEnrich, 200, true)]
    #[test_case(RequestKind::PersonEnrich, 202, true)]
    #[test_case(RequestKind::PersonEnrich, 404, true)]
    #[test_case(RequestKind::PersonEnrich, 204, false)]
    #[test_case(RequestKind::CompanyEnrich, 202, true)]
    #[test_case(RequestKind::CompanySearch, 400, false)]
    #[test_case(RequestKind::CompanySearch, 404, true)]
    #[test_case(RequestKind::IdentityMap, 204, true)]
    #[test_case(RequestKind::IdentityMap, 202, false)]
    #[test_case(RequestKind::IdentityResolve, 404, true)]
    #[test_case(RequestKind::IdentityDelete, 204, true)]
    #[test_case(RequestKind::IdentityDelete, 500, false)]
    fn test_is_success_per_kind(kind: RequestKind, status: u16, expected: bool) {
        assert_eq!(kind.is_success(status), expected);
    }

    #[test]
    fn test_transport_error_yields_error_only_outcome() {
        let outcome = classify(
            RequestKind::PersonEnrich,
            Err(FullContactError::Network {
                message: "connection refused".to_string(),
            }),
        );
        assert!(!outcome.is_successful);
        assert_eq!(outcome.status_code, None);
        assert!(outcome.error.is_some());
        assert!(outcome.person.is_none());
    }

    #[test]
    fn test_person_body_round_trip() {
        let outcome = classify(
            RequestKind::PersonEnrich,
            Ok(response(200, fixtures::PERSON_BODY)),
        );
        assert!(outcome.is_successful);
        assert_eq!(outcome.status_code, Some(200));
        assert!(outcome.error.is_none());
        let person = outcome.person.unwrap();
        assert_eq!(person.full_name.as_deref(), Some("Bart Lorang"));
    }

    #[test]
    fn test_company_body_round_trip() {
        let outcome = classify(
            RequestKind::CompanyEnrich,
            Ok(response(200, fixtures::COMPANY_BODY)),
        );
        assert!(outcome.is_successful);
        assert!(outcome.error.is_none());
        let company = outcome.company.unwrap();
        assert_eq!(company.name.as_deref(), Some("FullContact Inc."));
        assert_eq!(company.founded, Some(2010));
        assert_eq!(company.employees, Some(300));
    }

    #[test]
    fn test_company_search_body_round_trip() {
        let outcome = classify(
            RequestKind::CompanySearch,
            Ok(response(200, fixtures::COMPANY_SEARCH_BODY)),
        );
        assert!(outcome.is_successful);
        let results = outcome.company_search.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].lookup_domain.as_deref(), Some("fullcontact.com"));
    }

    #[test]
    fn test_resolve_body_round_trip() {
        let outcome = classify(
            RequestKind::IdentityResolve,
            Ok(response(200, fixtures::RESOLVE_BODY)),
        );
        assert!(outcome.is_successful);
        let resolve = outcome.resolve.unwrap();
        assert_eq!(resolve.record_ids, vec!["customer-123".to_string()]);
    }

    #[test]
    fn test_empty_body_is_zero_value_payload() {
        for kind in RequestKind::ALL {
            let outcome = classify(kind, Ok(response(404, "")));
            assert!(outcome.is_successful, "{:?}", kind);
            assert!(outcome.error.is_none(), "{:?}", kind);
            match kind {
                RequestKind::PersonEnrich => {
                    assert_eq!(outcome.person, Some(Default::default()))
                }
                RequestKind::CompanyEnrich => {
                    assert_eq!(outcome.company, Some(Default::default()))
                }
                RequestKind::CompanySearch => {
                    assert_eq!(outcome.company_search, Some(Vec::new()))
                }
                _ => assert_eq!(outcome.resolve, Some(Default::default())),
            }
        }
    }

    #[test]
    fn test_malformed_body_is_deserialization_error() {
        let outcome = classify(RequestKind::CompanyEnrich, Ok(response(200, "not json")));
        assert!(!outcome.is_successful);
        assert_eq!(outcome.status_code, Some(200));
        assert!(matches!(
            outcome.error,
            Some(FullContactError::Deserialization { .. })
        ));
        assert!(outcome.company.is_none());
    }

    #[test]
    fn test_test_type_header_overrides_kind() {
        let mut headers = HeaderMap::new();
        headers.insert(
            FC_TEST_TYPE_HEADER,
            HeaderValue::from_static("/v3/person.enrich"),
        );
        let raw = HttpResponse {
            status: 200,
            headers,
            body: Bytes::from(fixtures::PERSON_BODY),
        };
        // called the company endpoint, classified as a person response
        let outcome = classify(RequestKind::CompanyEnrich, Ok(raw));
        assert!(outcome.person.is_some());
        assert!(outcome.company.is_none());
    }
}
