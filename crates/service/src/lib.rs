//! Service layer for the legal practice registry.
//! - `storage`: keyed record collections (JSON file-backed).
//! - `services`: the `LegalService` context implementing every registry operation.
//! - Errors are reported as `ServiceError`; nothing panics across an operation boundary.

pub mod errors;
pub mod clock;
pub mod runtime;
pub mod storage;
pub mod services;
#[cfg(test)]
pub mod test_support;

pub use services::LegalService;
