//! Per-kind request validators.
//!
//! The dispatch core treats validation as an injected collaborator: each
//! endpoint owns one `validate(request) -> error-or-nil` function, run
//! synchronously before anything is serialized or spawned. The defaults
//! below cover the documented minimum for each endpoint and can be replaced
//! wholesale at client construction.

use crate::errors::FullContactError;
use crate::types::{CompanyRequest, PersonRequest, ResolveRequest};
use std::sync::Arc;

/// An injected validation function for one request kind.
pub type Validator<R> = Arc<dyn Fn(&R) -> Result<(), FullContactError> + Send + Sync>;

/// The full set of per-kind validators used by a client.
#[derive(Clone)]
pub struct Validators {
    /// Validator for `person.enrich`
    pub person_enrich: Validator<PersonRequest>,
    /// Validator for `company.enrich`
    pub company_enrich: Validator<CompanyRequest>,
    /// Validator for `company.search`
    pub company_search: Validator<CompanyRequest>,
    /// Validator for `identity.map`
    pub identity_map: Validator<ResolveRequest>,
    /// Validator for `identity.resolve`
    pub identity_resolve: Validator<ResolveRequest>,
    /// Validator for `identity.delete`
    pub identity_delete: Validator<ResolveRequest>,
}

impl Default for Validators {
    fn default() -> Self {
        Self {
            person_enrich: Arc::new(validate_person_enrich),
            company_enrich: Arc::new(validate_company_enrich),
            company_search: Arc::new(validate_company_search),
            identity_map: Arc::new(validate_identity_map),
            identity_resolve: Arc::new(validate_identity_resolve),
            identity_delete: Arc::new(validate_identity_delete),
        }
    }
}

fn invalid(message: &str) -> FullContactError {
    FullContactError::Validation {
        message: message.to_string(),
    }
}

/// Person enrich requires at least one queryable field.
pub fn validate_person_enrich(request: &PersonRequest) -> Result<(), FullContactError> {
    if request.is_empty() {
        return Err(invalid("Person request can't be empty"));
    }
    Ok(())
}

/// Company enrich looks up by domain.
pub fn validate_company_enrich(request: &CompanyRequest) -> Result<(), FullContactError> {
    if request.domain.as_deref().unwrap_or("").is_empty() {
        return Err(invalid("Company enrich requires a domain"));
    }
    Ok(())
}

/// Company search looks up by name.
pub fn validate_company_search(request: &CompanyRequest) -> Result<(), FullContactError> {
    if request.name.as_deref().unwrap_or("").is_empty() {
        return Err(invalid("Company search requires a name"));
    }
    Ok(())
}

/// Identity map takes identifiers to map, never a FullContact person id.
pub fn validate_identity_map(request: &ResolveRequest) -> Result<(), FullContactError> {
    if request.person_id.is_some() {
        return Err(invalid("Identity map can't take a person id"));
    }
    if !request.has_identifier() {
        return Err(invalid("Identity map requires at least one identifier"));
    }
    Ok(())
}

/// Identity resolve takes a record id or a person id, not both.
pub fn validate_identity_resolve(request: &ResolveRequest) -> Result<(), FullContactError> {
    if request.record_id.is_some() && request.person_id.is_some() {
        return Err(invalid(
            "Identity resolve can't take both a record id and a person id",
        ));
    }
    if !request.has_identifier() {
        return Err(invalid("Identity resolve requires at least one identifier"));
    }
    Ok(())
}

/// Identity delete removes a previously mapped record.
pub fn validate_identity_delete(request: &ResolveRequest) -> Result<(), FullContactError> {
    if request.record_id.as_deref().unwrap_or("").is_empty() {
        return Err(invalid("Identity delete requires a record id"));
    }
    Ok(())
}
