//! Request and response value objects for the six FullContact endpoints.
//!
//! These are opaque payloads as far as the dispatch core is concerned: the
//! dispatcher serializes a request without inspecting it and the classifier
//! picks the response shape from the request kind. Every response type
//! derives `Default` with `#[serde(default)]` fields so that an empty body
//! deserializes to a zero value.

mod company;
mod person;
mod resolve;

pub use company::{CompanyRequest, CompanyResponse, CompanySearchResult};
pub use person::{Location, PersonName, PersonRequest, PersonResponse, Profile};
pub use resolve::{ResolveRequest, ResolveResponse};
