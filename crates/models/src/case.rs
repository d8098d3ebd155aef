use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, require_all, Timestamp};

/// State given to every new case.
pub const DEFAULT_STATE: &str = "Pending";

/// A legal case. Updates never mutate a stored case in place: the
/// `with_*` helpers build a replacement value that is written back under
/// the same id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    #[serde(rename = "Case_name")]
    pub case_name: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: Timestamp,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: Option<Timestamp>,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Documents")]
    pub documents: Vec<String>,
    #[serde(rename = "Timeline")]
    pub timeline: String,
    /// Free-form; any string is accepted.
    #[serde(rename = "State")]
    pub state: String,
    /// Empty until a lawyer is assigned. Not re-checked if the lawyer disappears later.
    #[serde(rename = "LawyerId")]
    pub lawyer_id: String,
    #[serde(rename = "ClientId")]
    pub client_id: String,
    #[serde(rename = "WitnessIds")]
    pub witness_ids: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasePayload {
    #[serde(rename = "Case_name", default)]
    pub case_name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    /// Must be present; an empty list is accepted.
    #[serde(rename = "Documents", default)]
    pub documents: Option<Vec<String>>,
    #[serde(rename = "Timeline", default)]
    pub timeline: String,
}

impl CasePayload {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.documents.is_none() {
            return Err(ModelError::invalid_payload());
        }
        require_all(&[&self.case_name, &self.description, &self.timeline])
    }
}

impl Case {
    pub fn new(payload: CasePayload, id: String, now: Timestamp) -> Self {
        Self {
            id,
            case_name: payload.case_name,
            created_at: now,
            updated_at: None,
            description: payload.description,
            documents: payload.documents.unwrap_or_default(),
            timeline: payload.timeline,
            state: DEFAULT_STATE.into(),
            lawyer_id: String::new(),
            client_id: String::new(),
            witness_ids: None,
        }
    }

    /// Copy of this case referencing `lawyer_id`; every other field is kept.
    pub fn with_lawyer(&self, lawyer_id: &str) -> Self {
        Self { lawyer_id: lawyer_id.to_string(), ..self.clone() }
    }

    /// Copy of this case in `state`; every other field is kept.
    pub fn with_state(&self, state: &str) -> Self {
        Self { state: state.to_string(), ..self.clone() }
    }
}
