//! Record types for the legal practice registry.
//!
//! Each entity comes with a payload (what a caller supplies) and a constructor
//! that stamps the generated id and creation time. Field names on the wire and
//! on disk keep their historical spelling (`Case_name`, `datJoined`, ...).

pub mod errors;
pub mod client;
pub mod lawyer;
pub mod case;
pub mod witness;

pub use case::{Case, CasePayload};
pub use client::{Client, ClientPayload};
pub use lawyer::{Lawyer, LawyerPayload};
pub use witness::{Witness, WitnessPayload};

/// Nanoseconds since the Unix epoch.
pub type Timestamp = u64;

/// Every listed field must be non-empty.
pub(crate) fn require_all<S: AsRef<str>>(fields: &[S]) -> Result<(), errors::ModelError> {
    if fields.iter().any(|f| f.as_ref().is_empty()) {
        return Err(errors::ModelError::invalid_payload());
    }
    Ok(())
}
