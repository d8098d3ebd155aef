use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, require_all};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    pub id: String,
    #[serde(rename = "Fullname")]
    pub full_name: String,
    pub national_id: String,
    #[serde(rename = "Testimony")]
    pub testimony: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessPayload {
    #[serde(rename = "Fullname", default)]
    pub full_name: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(rename = "Testimony", default)]
    pub testimony: String,
}

impl WitnessPayload {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_all(&[&self.full_name, &self.national_id, &self.testimony])
    }
}

impl Witness {
    pub fn new(payload: WitnessPayload, id: String) -> Self {
        Self {
            id,
            full_name: payload.full_name,
            national_id: payload.national_id,
            testimony: payload.testimony,
        }
    }
}
