//! Error types for the FullContact client.

mod error;

pub use error::{FcResult, FullContactError};
