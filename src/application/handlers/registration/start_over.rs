//! StartOverHandler - resets the wizard for the next registration.

use std::sync::Arc;

use crate::domain::wizard::WizardState;
use crate::ports::{RegistrationStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartOverResult {
    /// Registrations stored so far.
    pub registration_count: usize,
}

pub struct StartOverHandler {
    store: Arc<dyn RegistrationStore>,
}

impl StartOverHandler {
    pub fn new(store: Arc<dyn RegistrationStore>) -> Self {
        Self { store }
    }

    /// Returns the wizard to step 1 with nothing selected, keeping the
    /// chosen gender, and reports the running registration count.
    pub async fn handle(&self, wizard: &mut WizardState) -> Result<StartOverResult, StoreError> {
        wizard.reset();
        let stats = self.store.stats().await?;
        tracing::debug!(registration_count = stats.total, "Wizard reset");
        Ok(StartOverResult {
            registration_count: stats.total,
        })
    }
}
