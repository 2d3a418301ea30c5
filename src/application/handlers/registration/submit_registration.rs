//! SubmitRegistrationHandler - final submit from the review step.
//!
//! Assembles the record, offers it to the relay, then persists it. The store
//! is authoritative: a relay failure is logged and ignored, a store failure
//! fails the submit and leaves the wizard on the review step for a retry.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::domain::registration::{self, RegistrationRecord};
use crate::domain::wizard::{WizardError, WizardState, WizardStep};
use crate::ports::{RegistrationRelay, RegistrationStore, RelayOutcome, StoreError};

/// Result of a successful submit.
#[derive(Debug)]
pub struct SubmitRegistrationResult {
    pub record: RegistrationRecord,
    pub relay: RelayOutcome,
    /// Registrations in the store after this one, if the store could count them.
    pub registration_count: Option<usize>,
}

#[derive(Debug, Error)]
pub enum SubmitRegistrationError {
    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error("Failed to save registration. Please try again. ({0})")]
    Store(#[from] StoreError),
}

impl From<SubmitRegistrationError> for DomainError {
    fn from(err: SubmitRegistrationError) -> Self {
        match err {
            SubmitRegistrationError::Wizard(e) => e.into(),
            SubmitRegistrationError::Store(e) => e.into(),
        }
    }
}

/// Handler for the final submit.
pub struct SubmitRegistrationHandler {
    store: Arc<dyn RegistrationStore>,
    relay: Arc<dyn RegistrationRelay>,
}

impl SubmitRegistrationHandler {
    pub fn new(store: Arc<dyn RegistrationStore>, relay: Arc<dyn RegistrationRelay>) -> Self {
        Self { store, relay }
    }

    pub async fn handle(
        &self,
        wizard: &mut WizardState,
    ) -> Result<SubmitRegistrationResult, SubmitRegistrationError> {
        // 1. Only the review step submits
        if wizard.step() != WizardStep::Review {
            return Err(WizardError::NotOnStep {
                expected: WizardStep::Review,
                actual: wizard.step(),
            }
            .into());
        }

        // 2. Assemble the immutable record
        let record = registration::assemble(wizard)?;
        tracing::info!(
            registration_id = %record.id,
            sport_id = %record.details.sport_id,
            "Submitting registration"
        );

        // 3. Relay, best effort
        let relay = self.relay.forward(&record).await;
        if !relay.is_sent() {
            tracing::warn!(
                registration_id = %record.id,
                relay = %relay,
                "Registration not relayed, continuing with local save"
            );
        }

        // 4. Persist, authoritative
        if let Err(e) = self.store.append(&record).await {
            tracing::error!(registration_id = %record.id, error = %e, "Failed to save registration");
            return Err(e.into());
        }

        // 5. Close the session
        wizard.complete()?;

        let registration_count = match self.store.stats().await {
            Ok(stats) => Some(stats.total),
            Err(e) => {
                tracing::warn!(error = %e, "Could not count registrations");
                None
            }
        };

        tracing::info!(registration_id = %record.id, "Registration completed");
        Ok(SubmitRegistrationResult {
            record,
            relay,
            registration_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryRegistrationStore;
    use crate::domain::catalog::test_support::offering;
    use crate::domain::catalog::{Catalog, GameType};
    use crate::domain::foundation::{OfferingId, RegistrationId, Timestamp};
    use crate::domain::wizard::PaymentOutcome;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockRelay {
        outcome: RelayOutcome,
        forwarded: Mutex<Vec<RegistrationId>>,
    }

    impl MockRelay {
        fn returning(outcome: RelayOutcome) -> Self {
            Self {
                outcome,
                forwarded: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RegistrationRelay for MockRelay {
        async fn forward(&self, record: &RegistrationRecord) -> RelayOutcome {
            self.forwarded.lock().unwrap().push(record.id);
            self.outcome.clone()
        }
    }

    struct FailingStore;

    #[async_trait]
    impl RegistrationStore for FailingStore {
        async fn append(&self, _record: &RegistrationRecord) -> Result<(), StoreError> {
            Err(StoreError::IoError("disk full".to_string()))
        }

        async fn list_all(&self) -> Result<Vec<RegistrationRecord>, StoreError> {
            Ok(Vec::new())
        }

        async fn remove(&self, _id: RegistrationId) -> Result<bool, StoreError> {
            Ok(false)
        }

        async fn clear(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn wizard_on_review() -> WizardState {
        let catalog =
            Catalog::from_offerings(vec![offering("x", GameType::Individual, 1, 200)]).unwrap();
        let mut w = WizardState::new(Arc::new(catalog));
        w.begin().unwrap();
        w.select_offering(&OfferingId::new("x").unwrap()).unwrap();
        w.advance().unwrap();
        w.set_team_name("Solo").unwrap();
        w.set_contact("9876543210").unwrap();
        w.set_player_name(0, "Rahul").unwrap();
        w.advance().unwrap();
        w.record_payment(&PaymentOutcome::success("pay_123"), Timestamp::now())
            .unwrap();
        w.advance().unwrap();
        w
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn submit_persists_relays_and_completes() {
        let store = Arc::new(InMemoryRegistrationStore::new());
        let relay = Arc::new(MockRelay::returning(RelayOutcome::Sent));
        let handler = SubmitRegistrationHandler::new(store.clone(), relay.clone());
        let mut w = wizard_on_review();

        let result = handler.handle(&mut w).await.unwrap();

        assert_eq!(result.relay, RelayOutcome::Sent);
        assert_eq!(result.registration_count, Some(1));
        assert_eq!(result.record.details.external_payment_id, "pay_123");
        assert_eq!(store.list_all().await.unwrap(), vec![result.record.clone()]);
        assert_eq!(*relay.forwarded.lock().unwrap(), vec![result.record.id]);
        assert_eq!(w.step(), WizardStep::Completed);
    }

    #[tokio::test]
    async fn relay_failure_does_not_block_save() {
        let store = Arc::new(InMemoryRegistrationStore::new());
        let relay = Arc::new(MockRelay::returning(RelayOutcome::Failed(
            "Connection failed".to_string(),
        )));
        let handler = SubmitRegistrationHandler::new(store.clone(), relay);
        let mut w = wizard_on_review();

        let result = handler.handle(&mut w).await.unwrap();

        assert!(matches!(result.relay, RelayOutcome::Failed(_)));
        assert_eq!(store.count().await, 1);
        assert_eq!(w.step(), WizardStep::Completed);
    }

    #[tokio::test]
    async fn store_failure_fails_submit_and_stays_on_review() {
        let relay = Arc::new(MockRelay::returning(RelayOutcome::NotConfigured));
        let handler = SubmitRegistrationHandler::new(Arc::new(FailingStore), relay);
        let mut w = wizard_on_review();

        let err = handler.handle(&mut w).await.unwrap_err();

        assert!(matches!(err, SubmitRegistrationError::Store(_)));
        assert!(err.to_string().starts_with("Failed to save registration"));
        assert_eq!(w.step(), WizardStep::Review);
        assert!(w.is_paid());
    }

    #[tokio::test]
    async fn submit_outside_review_is_rejected() {
        let store = Arc::new(InMemoryRegistrationStore::new());
        let relay = Arc::new(MockRelay::returning(RelayOutcome::Sent));
        let handler = SubmitRegistrationHandler::new(store.clone(), relay.clone());
        let mut w = wizard_on_review();
        w.retreat(WizardStep::Payment).unwrap();

        let err = handler.handle(&mut w).await.unwrap_err();

        assert!(matches!(
            err,
            SubmitRegistrationError::Wizard(WizardError::NotOnStep { .. })
        ));
        assert!(relay.forwarded.lock().unwrap().is_empty());
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn retry_after_store_failure_creates_new_id() {
        let relay = Arc::new(MockRelay::returning(RelayOutcome::Disabled));
        let mut w = wizard_on_review();
        let failing = SubmitRegistrationHandler::new(Arc::new(FailingStore), relay.clone());
        failing.handle(&mut w).await.unwrap_err();

        let store = Arc::new(InMemoryRegistrationStore::new());
        let working = SubmitRegistrationHandler::new(store.clone(), relay.clone());
        let result = working.handle(&mut w).await.unwrap();

        let forwarded = relay.forwarded.lock().unwrap().clone();
        assert_eq!(forwarded.len(), 2);
        assert_ne!(forwarded[0], result.record.id);
        assert_eq!(store.count().await, 1);
    }
}
