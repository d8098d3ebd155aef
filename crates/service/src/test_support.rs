#![cfg(test)]
use std::sync::Arc;

use async_trait::async_trait;
use models::{CasePayload, ClientPayload, LawyerPayload, Timestamp, WitnessPayload};

use crate::clock::Clock;
use crate::errors::ServiceError;
use crate::services::{LegalService, Stores};
use crate::storage::RecordStore;

pub const FIXED_NOW: Timestamp = 1_700_000_000_000_000_000;

pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp { self.0 }
}

/// In-memory service with a frozen clock.
pub fn service() -> LegalService {
    LegalService::in_memory().with_clock(Arc::new(FixedClock(FIXED_NOW)))
}

/// Store whose writes always fail, as a full disk would.
pub struct FailingStore;

#[async_trait]
impl<V: Send + 'static> RecordStore<String, V> for FailingStore {
    async fn insert(&self, _key: String, _value: V) -> Result<Option<V>, ServiceError> {
        Err(ServiceError::internal("no space left on device"))
    }
    async fn get(&self, _key: &String) -> Option<V> { None }
    async fn values(&self) -> Vec<V> { Vec::new() }
    async fn remove(&self, _key: &String) -> Result<Option<V>, ServiceError> {
        Err(ServiceError::internal("no space left on device"))
    }
    async fn len(&self) -> usize { 0 }
}

pub fn failing_service() -> LegalService {
    LegalService::new(Stores {
        clients: Arc::new(FailingStore),
        lawyers: Arc::new(FailingStore),
        cases: Arc::new(FailingStore),
        witnesses: Arc::new(FailingStore),
    })
}

pub fn client_payload() -> ClientPayload {
    ClientPayload {
        name: "Grace".into(),
        surname: "Hopper".into(),
        phone_number: "555-0199".into(),
        email: "grace@example.com".into(),
        gender: "F".into(),
        occupation: "Engineer".into(),
        marital_status: "Single".into(),
        nationality: "US".into(),
    }
}

pub fn lawyer_payload() -> LawyerPayload {
    LawyerPayload {
        title: "Mr".into(),
        name: "A".into(),
        surname: "B".into(),
        phone_number: "555".into(),
        email: "a@b.com".into(),
        case_category: "Civil".into(),
        experience: "5y".into(),
        nationality: "X".into(),
    }
}

pub fn case_payload(name: &str) -> CasePayload {
    CasePayload {
        case_name: name.into(),
        description: "Contract dispute".into(),
        documents: Some(vec!["doc1.pdf".into()]),
        timeline: "6 months".into(),
    }
}

pub fn witness_payload() -> WitnessPayload {
    WitnessPayload {
        full_name: "John Doe".into(),
        national_id: "ID-123".into(),
        testimony: "Saw the signing".into(),
    }
}
