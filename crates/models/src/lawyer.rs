use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, require_all, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lawyer {
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Surname")]
    pub surname: String,
    #[serde(rename = "Phonenumber")]
    pub phone_number: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Case_Category")]
    pub case_category: String,
    #[serde(rename = "Case_Won")]
    pub cases_won: u64,
    #[serde(rename = "Case_Lost")]
    pub cases_lost: u64,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawyerPayload {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Surname", default)]
    pub surname: String,
    #[serde(rename = "Phonenumber", default)]
    pub phone_number: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Case_Category", default)]
    pub case_category: String,
    #[serde(rename = "Experience", default)]
    pub experience: String,
    #[serde(rename = "Nationality", default)]
    pub nationality: String,
}

impl LawyerPayload {
    /// Experience and nationality are passed through unchecked.
    pub fn validate(&self) -> Result<(), ModelError> {
        require_all(&[
            &self.title,
            &self.name,
            &self.surname,
            &self.phone_number,
            &self.email,
            &self.case_category,
        ])
    }
}

impl Lawyer {
    pub fn new(payload: LawyerPayload, id: String, now: Timestamp) -> Self {
        Self {
            id,
            title: payload.title,
            name: payload.name,
            surname: payload.surname,
            phone_number: payload.phone_number,
            email: payload.email,
            case_category: payload.case_category,
            cases_won: 0,
            cases_lost: 0,
            experience: payload.experience,
            nationality: payload.nationality,
            created_at: now,
        }
    }
}
