use models::{Case, CasePayload, Client, ClientPayload, Lawyer, LawyerPayload, Witness, WitnessPayload};
use tracing::{error, info, instrument, warn};

use super::{require_ids, LegalService, INVALID_ID};
use crate::errors::ServiceError;
use crate::storage::RecordStore;

/// Log and prefix an internal failure with the operation that hit it.
pub(super) fn wrap(operation: &'static str) -> impl FnOnce(ServiceError) -> ServiceError {
    move |e| {
        let e = e.context(operation);
        if let ServiceError::Internal(msg) = &e {
            error!(error = %msg, "operation_failed");
        }
        e
    }
}

impl LegalService {
    #[instrument(skip(self, payload))]
    pub async fn add_client(&self, payload: ClientPayload) -> Result<Client, ServiceError> {
        payload.validate()?;
        let client = Client::new(payload, self.ids.next_id(), self.clock.now());
        self.clients
            .insert(client.id.clone(), client.clone())
            .await
            .map_err(wrap("Error adding client"))?;
        info!(client_id = %client.id, "client_added");
        Ok(client)
    }

    #[instrument(skip(self, payload))]
    pub async fn add_lawyer(&self, payload: LawyerPayload) -> Result<Lawyer, ServiceError> {
        payload.validate()?;
        let lawyer = Lawyer::new(payload, self.ids.next_id(), self.clock.now());
        self.lawyers
            .insert(lawyer.id.clone(), lawyer.clone())
            .await
            .map_err(wrap("Error adding lawyer"))?;
        info!(lawyer_id = %lawyer.id, "lawyer_added");
        Ok(lawyer)
    }

    #[instrument(skip(self, payload))]
    pub async fn add_case(&self, payload: CasePayload) -> Result<Case, ServiceError> {
        payload.validate()?;
        let case = Case::new(payload, self.ids.next_id(), self.clock.now());
        self.cases
            .insert(case.id.clone(), case.clone())
            .await
            .map_err(wrap("Error adding case"))?;
        info!(case_id = %case.id, "case_added");
        Ok(case)
    }

    #[instrument(skip(self, payload))]
    pub async fn add_witness(&self, payload: WitnessPayload) -> Result<Witness, ServiceError> {
        payload.validate()?;
        let witness = Witness::new(payload, self.ids.next_id());
        self.witnesses
            .insert(witness.id.clone(), witness.clone())
            .await
            .map_err(wrap("Error adding witness"))?;
        info!(witness_id = %witness.id, "witness_added");
        Ok(witness)
    }

    #[instrument(skip(self))]
    pub async fn get_client(&self, id: &str) -> Result<Client, ServiceError> {
        require_ids(&[id], INVALID_ID)?;
        self.clients.get(&id.to_string()).await.ok_or_else(|| {
            warn!(client_id = %id, "client_not_found");
            ServiceError::not_found(format!("The client with id={id} was not found"))
        })
    }

    #[instrument(skip(self))]
    pub async fn get_lawyer(&self, id: &str) -> Result<Lawyer, ServiceError> {
        require_ids(&[id], INVALID_ID)?;
        self.lawyers.get(&id.to_string()).await.ok_or_else(|| {
            warn!(lawyer_id = %id, "lawyer_not_found");
            ServiceError::not_found(format!("The lawyer with id={id} was not found"))
        })
    }

    #[instrument(skip(self))]
    pub async fn get_case(&self, id: &str) -> Result<Case, ServiceError> {
        require_ids(&[id], INVALID_ID)?;
        self.cases.get(&id.to_string()).await.ok_or_else(|| {
            warn!(case_id = %id, "case_not_found");
            ServiceError::not_found("Case not found")
        })
    }

    #[instrument(skip(self))]
    pub async fn get_witness(&self, id: &str) -> Result<Witness, ServiceError> {
        require_ids(&[id], INVALID_ID)?;
        self.witnesses.get(&id.to_string()).await.ok_or_else(|| {
            warn!(witness_id = %id, "witness_not_found");
            ServiceError::not_found(format!("The witness with id={id} was not found"))
        })
    }

    pub async fn get_all_clients(&self) -> Result<Vec<Client>, ServiceError> {
        Ok(self.clients.values().await)
    }

    pub async fn get_all_lawyers(&self) -> Result<Vec<Lawyer>, ServiceError> {
        Ok(self.lawyers.values().await)
    }

    pub async fn get_all_cases(&self) -> Result<Vec<Case>, ServiceError> {
        Ok(self.cases.values().await)
    }

    pub async fn get_all_witnesses(&self) -> Result<Vec<Witness>, ServiceError> {
        Ok(self.witnesses.values().await)
    }
}
