use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, require_all, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Surname")]
    pub surname: String,
    #[serde(rename = "Phonenumber")]
    pub phone_number: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    /// Stamped with the creation time, not supplied by the caller.
    #[serde(rename = "Date_Of_Birth")]
    pub date_of_birth: Timestamp,
    #[serde(rename = "Occupation")]
    pub occupation: String,
    #[serde(rename = "Marital_Status")]
    pub marital_status: String,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    #[serde(rename = "datJoined")]
    pub date_joined: Timestamp,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientPayload {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Surname", default)]
    pub surname: String,
    #[serde(rename = "Phonenumber", default)]
    pub phone_number: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Gender", default)]
    pub gender: String,
    #[serde(rename = "Occupation", default)]
    pub occupation: String,
    #[serde(rename = "Marital_Status", default)]
    pub marital_status: String,
    #[serde(rename = "Nationality", default)]
    pub nationality: String,
}

impl ClientPayload {
    /// Name, surname, phone number and email are required.
    pub fn validate(&self) -> Result<(), ModelError> {
        require_all(&[&self.name, &self.surname, &self.phone_number, &self.email])
    }
}

impl Client {
    pub fn new(payload: ClientPayload, id: String, now: Timestamp) -> Self {
        Self {
            id,
            name: payload.name,
            surname: payload.surname,
            phone_number: payload.phone_number,
            email: payload.email,
            gender: payload.gender,
            date_of_birth: now,
            occupation: payload.occupation,
            marital_status: payload.marital_status,
            nationality: payload.nationality,
            date_joined: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ClientPayload {
        ClientPayload {
            name: "Ada".into(),
            surname: "Lovelace".into(),
            phone_number: "555-0100".into(),
            email: "ada@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn optional_fields_may_be_empty() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn each_required_field_is_checked() {
        let mut p = payload();
        p.name.clear();
        assert_eq!(p.validate(), Err(ModelError::invalid_payload()));

        let mut p = payload();
        p.email.clear();
        assert_eq!(p.validate(), Err(ModelError::invalid_payload()));
    }

    #[test]
    fn missing_fields_deserialize_as_empty_and_fail_validation() {
        let p: ClientPayload = serde_json::from_str(r#"{"Name":"Ada","Surname":"L"}"#).unwrap();
        assert!(p.validate().is_err());
    }

    #[test]
    fn both_timestamps_take_creation_time() {
        let c = Client::new(payload(), "c-1".into(), 42);
        assert_eq!(c.date_of_birth, 42);
        assert_eq!(c.date_joined, 42);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["datJoined"], 42);
        assert_eq!(json["Phonenumber"], "555-0100");
    }
}
