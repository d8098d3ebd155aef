use models::Case;
use tracing::{info, instrument, warn};

use super::registry::wrap;
use super::{require_ids, LegalService, INVALID_ID, INVALID_IDS};
use crate::errors::ServiceError;
use crate::storage::RecordStore;

impl LegalService {
    /// Point a case at a lawyer. Both records must exist at this moment; the
    /// lawyer record itself is left untouched.
    #[instrument(skip(self))]
    pub async fn assign_lawyer_to_case(&self, case_id: &str, lawyer_id: &str) -> Result<Case, ServiceError> {
        require_ids(&[case_id, lawyer_id], INVALID_IDS)?;
        let _guard = self.write_lock.lock().await;

        let case = self.cases.get(&case_id.to_string()).await.ok_or_else(|| {
            warn!(%case_id, "case_not_found");
            ServiceError::not_found("Case does not exist")
        })?;
        let lawyer = self.lawyers.get(&lawyer_id.to_string()).await.ok_or_else(|| {
            warn!(%case_id, %lawyer_id, "lawyer_not_found");
            ServiceError::not_found("Failed to assign case to the lawyer")
        })?;

        let updated = case.with_lawyer(&lawyer.id);
        self.cases
            .insert(case.id.clone(), updated.clone())
            .await
            .map_err(wrap("Error assigning lawyer to case"))?;
        info!(%case_id, %lawyer_id, "lawyer_assigned");
        Ok(updated)
    }

    /// Replace a case's state. Any string is accepted.
    #[instrument(skip(self))]
    pub async fn update_case_state(&self, case_id: &str, new_state: &str) -> Result<Case, ServiceError> {
        require_ids(&[case_id], INVALID_ID)?;
        let _guard = self.write_lock.lock().await;

        let case = self.cases.get(&case_id.to_string()).await.ok_or_else(|| {
            warn!(%case_id, "case_not_found");
            ServiceError::not_found("Case does not exist")
        })?;

        let updated = case.with_state(new_state);
        self.cases
            .insert(case.id.clone(), updated.clone())
            .await
            .map_err(wrap("Error updating case state"))?;
        info!(%case_id, state = %new_state, "case_state_updated");
        Ok(updated)
    }

    /// Remove a case and return it.
    #[instrument(skip(self))]
    pub async fn delete_case(&self, case_id: &str) -> Result<Case, ServiceError> {
        require_ids(&[case_id], INVALID_ID)?;
        // same guard as the updates: a replace racing a delete must not resurrect the case
        let _guard = self.write_lock.lock().await;

        let removed = self
            .cases
            .remove(&case_id.to_string())
            .await
            .map_err(wrap("Error deleting case"))?;
        match removed {
            Some(case) => {
                info!(%case_id, "case_deleted");
                Ok(case)
            }
            None => {
                warn!(%case_id, "case_not_found");
                Err(ServiceError::not_found("Case not found"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::{case_payload, failing_service, lawyer_payload, service};

    #[tokio::test]
    async fn assign_lawyer_sets_only_lawyer_id() -> Result<(), ServiceError> {
        let svc = service();
        let case = svc.add_case(case_payload("Smith v. Jones")).await?;
        let lawyer = svc.add_lawyer(lawyer_payload()).await?;

        let updated = svc.assign_lawyer_to_case(&case.id, &lawyer.id).await?;
        assert_eq!(updated.lawyer_id, lawyer.id);
        assert_eq!(Case { lawyer_id: String::new(), ..updated.clone() }, case);
        assert_eq!(svc.get_case(&case.id).await?, updated);

        // lawyer record is not touched
        assert_eq!(svc.get_lawyer(&lawyer.id).await?, lawyer);
        Ok(())
    }

    #[tokio::test]
    async fn assign_lawyer_reports_which_side_is_missing() -> Result<(), ServiceError> {
        let svc = service();
        let lawyer = svc.add_lawyer(lawyer_payload()).await?;
        assert_eq!(
            svc.assign_lawyer_to_case("missing", &lawyer.id).await,
            Err(ServiceError::NotFound("Case does not exist".into()))
        );

        let case = svc.add_case(case_payload("x")).await?;
        assert_eq!(
            svc.assign_lawyer_to_case(&case.id, "missing").await,
            Err(ServiceError::NotFound("Failed to assign case to the lawyer".into()))
        );
        assert_eq!(svc.get_case(&case.id).await?.lawyer_id, "");

        assert_eq!(
            svc.assign_lawyer_to_case(&case.id, "").await,
            Err(ServiceError::Validation("Invalid IDs".into()))
        );
        Ok(())
    }

    #[tokio::test]
    async fn update_state_is_idempotent_and_unvalidated() -> Result<(), ServiceError> {
        let svc = service();
        let case = svc.add_case(case_payload("x")).await?;

        let closed = svc.update_case_state(&case.id, "Closed").await?;
        assert_eq!(closed, Case { state: "Closed".into(), ..case.clone() });
        assert_eq!(svc.update_case_state(&case.id, "Closed").await?, closed);

        let odd = svc.update_case_state(&case.id, "not-a-real-state").await?;
        assert_eq!(odd.state, "not-a-real-state");

        assert_eq!(
            svc.update_case_state("missing", "Closed").await,
            Err(ServiceError::NotFound("Case does not exist".into()))
        );
        assert_eq!(
            svc.update_case_state("", "Closed").await,
            Err(ServiceError::Validation("Invalid ID".into()))
        );
        Ok(())
    }

    #[tokio::test]
    async fn delete_case_then_lookups_fail() -> Result<(), ServiceError> {
        let svc = service();
        let case = svc.add_case(case_payload("x")).await?;

        assert_eq!(svc.delete_case(&case.id).await?, case);
        assert_eq!(svc.get_case(&case.id).await, Err(ServiceError::NotFound("Case not found".into())));
        assert_eq!(svc.delete_case(&case.id).await, Err(ServiceError::NotFound("Case not found".into())));
        assert!(matches!(svc.delete_case("").await, Err(ServiceError::Validation(_))));
        assert_eq!(svc.delete_case(" ").await, Err(ServiceError::NotFound("Case not found".into())));
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_updates_do_not_lose_the_assignment() -> Result<(), ServiceError> {
        let svc = Arc::new(service());
        let case = svc.add_case(case_payload("x")).await?;
        let lawyer = svc.add_lawyer(lawyer_payload()).await?;

        let mut handles = Vec::new();
        for i in 0..16 {
            let svc = Arc::clone(&svc);
            let (case_id, lawyer_id) = (case.id.clone(), lawyer.id.clone());
            handles.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    svc.assign_lawyer_to_case(&case_id, &lawyer_id).await.map(|_| ())
                } else {
                    svc.update_case_state(&case_id, "Open").await.map(|_| ())
                }
            }));
        }
        for h in handles {
            h.await.expect("task joined")?;
        }

        let stored = svc.get_case(&case.id).await?;
        assert_eq!(stored.lawyer_id, lawyer.id);
        assert_eq!(stored.state, "Open");
        Ok(())
    }

    #[tokio::test]
    async fn store_failure_on_delete_is_wrapped() {
        let svc = failing_service();
        let err = svc.delete_case("any").await.unwrap_err();
        assert!(err.to_string().starts_with("Error deleting case: "), "{err}");
    }
}
