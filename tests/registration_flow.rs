//! Integration tests for the registration wizard.
//!
//! Drives a full session through the handlers with real adapters where they
//! only need the filesystem (file store, Markdown receipts) and scripted
//! ones for the network (mock gateway, relay against a local mock server).

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use sports_registration::adapters::{
    FileRegistrationStore, MarkdownReceiptRenderer, MockPaymentGateway, ReceiptLayout,
    SheetsRelay, SheetsRelayConfig,
};
use sports_registration::application::{
    PayEntryFeeHandler, StartOverHandler, SubmitRegistrationHandler,
};
use sports_registration::domain::catalog::{Catalog, GameType, Gender};
use sports_registration::domain::foundation::OfferingId;
use sports_registration::domain::wizard::{
    PaymentOutcome, PaymentStatus, PaymentTerms, StepError, WizardError, WizardState, WizardStep,
};
use sports_registration::ports::{RegistrationStore, RelayOutcome};

// =============================================================================
// Test Infrastructure
// =============================================================================

const CATALOG: &str = r#"
offerings:
  - id: x
    name: "Solo Sprint"
    category: outdoor
    gender: boys
    genderRestriction: both
    gameType: individual
    playersCount: 1
    entryFee: 200
    icon: "🏃"
    hasCaptain: false
  - id: relay-team
    name: "Relay"
    category: outdoor
    gender: boys
    genderRestriction: both
    gameType: team
    playersCount: 3
    entryFee: 300
    icon: "🏃"
    hasCaptain: true
  - id: girls-chess
    name: "Chess"
    category: indoor
    gender: girls
    genderRestriction: both
    gameType: individual
    playersCount: 1
    entryFee: 50
    icon: "♟️"
    hasCaptain: false
"#;

struct Harness {
    _dir: TempDir,
    store: Arc<FileRegistrationStore>,
    gateway: MockPaymentGateway,
    receipts: Arc<MarkdownReceiptRenderer>,
    catalog: Arc<Catalog>,
}

impl Harness {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(FileRegistrationStore::new(dir.path(), "registrations"));
        let receipts = Arc::new(MarkdownReceiptRenderer::new(ReceiptLayout {
            output_dir: dir.path().join("receipts"),
            institution: "BHARAT COLLEGE OF ENGINEERING".to_string(),
            organizer: "Student Council".to_string(),
            event_title: "Sports Event Registration Receipt".to_string(),
            test_mode: true,
        }));
        Self {
            _dir: dir,
            store,
            gateway: MockPaymentGateway::new(),
            receipts,
            catalog: Arc::new(Catalog::from_yaml_str(CATALOG).unwrap()),
        }
    }

    fn wizard(&self) -> WizardState {
        let mut wizard = WizardState::new(self.catalog.clone());
        wizard.begin().unwrap();
        wizard
    }

    fn pay_handler(&self) -> PayEntryFeeHandler {
        PayEntryFeeHandler::new(
            Arc::new(self.gateway.clone()),
            self.receipts.clone(),
            PaymentTerms {
                currency: "INR".to_string(),
                merchant_name: "BCOE Sports Registration".to_string(),
                notes: Default::default(),
            },
        )
    }

    fn submit_handler(&self, relay: SheetsRelayConfig) -> SubmitRegistrationHandler {
        SubmitRegistrationHandler::new(self.store.clone(), Arc::new(SheetsRelay::new(relay)))
    }
}

fn disabled_relay() -> SheetsRelayConfig {
    SheetsRelayConfig {
        enabled: false,
        web_app_url: None,
        timeout: Duration::from_secs(5),
    }
}

fn offering_id(id: &str) -> OfferingId {
    OfferingId::new(id).unwrap()
}

/// Fills step 2 for the single-player offering `x`.
fn fill_solo(wizard: &mut WizardState) {
    wizard.set_team_name("Solo").unwrap();
    wizard.set_contact("9876543210").unwrap();
    wizard.set_player_name(0, "Rahul").unwrap();
}

// =============================================================================
// Catalog and step 1
// =============================================================================

#[test]
fn builtin_catalog_captains_follow_game_type() {
    let catalog = Catalog::builtin().unwrap();

    assert_eq!(catalog.len(), 25);
    for offering in catalog.all() {
        assert_eq!(
            offering.has_captain,
            offering.game_type == GameType::Team,
            "{}",
            offering.id
        );
    }
}

#[test]
fn changing_gender_clears_offering_and_blocks_progress() {
    let harness = Harness::new();
    let mut wizard = harness.wizard();
    wizard.select_offering(&offering_id("x")).unwrap();
    assert!(wizard.can_advance());

    wizard.select_gender(Gender::Girls).unwrap();

    assert!(wizard.selected_offering().is_none());
    assert!(!wizard.can_advance());
    let err = wizard.advance().unwrap_err();
    assert_eq!(err.step_errors(), &[StepError::NoOfferingSelected]);

    wizard.select_offering(&offering_id("girls-chess")).unwrap();
    assert!(wizard.can_advance());
}

// =============================================================================
// Step 2 validation
// =============================================================================

fn wizard_on_team_details(harness: &Harness) -> WizardState {
    let mut wizard = harness.wizard();
    wizard.select_offering(&offering_id("relay-team")).unwrap();
    wizard.advance().unwrap();
    wizard.set_team_name("Sprinters").unwrap();
    wizard.set_contact("9876543210").unwrap();
    wizard
}

#[test]
fn case_insensitive_duplicate_names_block_step_two() {
    let harness = Harness::new();
    let mut wizard = wizard_on_team_details(&harness);
    for (i, name) in ["Alice", "alice", "Bob"].into_iter().enumerate() {
        wizard.set_player_name(i, name).unwrap();
    }
    wizard.choose_captain(Some(0)).unwrap();
    wizard.choose_vice_captain(Some(2)).unwrap();

    let err = wizard.advance().unwrap_err();

    assert!(err
        .step_errors()
        .iter()
        .any(|e| matches!(e, StepError::DuplicatePlayerName(_))));
    assert_eq!(wizard.step(), WizardStep::PlayerDetails);
}

#[test]
fn team_without_leaders_is_rejected() {
    let harness = Harness::new();
    let mut wizard = wizard_on_team_details(&harness);
    for (i, name) in ["Alice", "Bob", "Cara"].into_iter().enumerate() {
        wizard.set_player_name(i, name).unwrap();
    }

    let err = wizard.advance().unwrap_err();

    assert!(matches!(err, WizardError::ValidationFailed { .. }));
    assert_eq!(
        err.step_errors(),
        &[StepError::CaptainRequired, StepError::ViceCaptainRequired]
    );
}

#[test]
fn same_captain_and_vice_is_rejected() {
    let harness = Harness::new();
    let mut wizard = wizard_on_team_details(&harness);
    for (i, name) in ["Alice", "Bob", "Cara"].into_iter().enumerate() {
        wizard.set_player_name(i, name).unwrap();
    }
    wizard.choose_captain(Some(1)).unwrap();
    wizard.choose_vice_captain(Some(1)).unwrap();

    let err = wizard.advance().unwrap_err();

    assert_eq!(err.step_errors(), &[StepError::SameCaptainAndVice]);
    assert!(err
        .to_string()
        .contains("Captain and Vice-Captain must be different players"));
}

// =============================================================================
// Payment
// =============================================================================

#[tokio::test]
async fn cancel_never_unblocks_review() {
    let harness = Harness::new();
    let mut wizard = harness.wizard();
    wizard.select_offering(&offering_id("x")).unwrap();
    wizard.advance().unwrap();
    fill_solo(&mut wizard);
    wizard.advance().unwrap();

    harness.gateway.push_outcome(PaymentOutcome::Cancelled);
    harness.pay_handler().handle(&mut wizard).await.unwrap();

    assert!(!wizard.can_advance());
    let err = wizard.advance().unwrap_err();
    assert_eq!(err.step_errors(), &[StepError::PaymentRequired]);

    harness.gateway.push_outcome(PaymentOutcome::success("pay_ok"));
    harness.pay_handler().handle(&mut wizard).await.unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.step(), WizardStep::Review);
}

// =============================================================================
// End to end
// =============================================================================

#[tokio::test]
async fn solo_registration_end_to_end() {
    let harness = Harness::new();
    let mut wizard = harness.wizard();

    wizard.select_offering(&offering_id("x")).unwrap();
    wizard.advance().unwrap();
    fill_solo(&mut wizard);
    wizard.advance().unwrap();

    harness.gateway.push_outcome(PaymentOutcome::success("pay_123"));
    let paid = harness.pay_handler().handle(&mut wizard).await.unwrap();
    assert!(paid.is_paid());
    let receipt = paid.receipt.clone().unwrap();
    assert!(harness.receipts.receipt_path(&receipt).exists());
    assert_eq!(harness.gateway.requests()[0].amount_minor, 20_000);
    assert_eq!(harness.gateway.requests()[0].description, "Solo Sprint Entry Fee");

    wizard.advance().unwrap();
    let submitted = harness
        .submit_handler(disabled_relay())
        .handle(&mut wizard)
        .await
        .unwrap();

    let details = &submitted.record.details;
    assert_eq!(details.entry_fee, 200);
    assert_eq!(details.players, vec!["Rahul".to_string()]);
    assert_eq!(details.captain, "N/A");
    assert_eq!(details.vice_captain, "N/A");
    assert_eq!(details.payment_status, PaymentStatus::Success);
    assert_eq!(details.external_payment_id, "pay_123");
    assert_eq!(details.receipt_id, receipt.receipt_id.to_string());
    assert_eq!(submitted.relay, RelayOutcome::Disabled);
    assert_eq!(submitted.registration_count, Some(1));
    assert_eq!(wizard.step(), WizardStep::Completed);

    let json = serde_json::to_value(&submitted.record).unwrap();
    assert_eq!(json["externalPaymentId"], "pay_123");
    assert_eq!(json["paymentStatus"], "Success");
    assert_eq!(json["playersString"], "Rahul");
}

#[tokio::test]
async fn appended_records_get_distinct_ids_and_counts() {
    let harness = Harness::new();
    let submit = harness.submit_handler(disabled_relay());
    let mut ids = HashSet::new();

    for round in 1..=3 {
        let mut wizard = harness.wizard();
        wizard.select_offering(&offering_id("x")).unwrap();
        wizard.advance().unwrap();
        fill_solo(&mut wizard);
        wizard.advance().unwrap();
        harness.pay_handler().handle(&mut wizard).await.unwrap();
        wizard.advance().unwrap();

        let before = harness.store.stats().await.unwrap().total;
        let result = submit.handle(&mut wizard).await.unwrap();

        assert!(ids.insert(result.record.id));
        assert_eq!(harness.store.stats().await.unwrap().total, before + 1);
        assert_eq!(harness.store.list_all().await.unwrap().len(), round);
    }

    let stored = harness.store.list_all().await.unwrap();
    assert!(stored.iter().all(|r| ids.contains(&r.id)));
}

#[tokio::test]
async fn relay_failure_does_not_block_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let harness = Harness::new();
    let mut wizard = harness.wizard();
    wizard.select_offering(&offering_id("x")).unwrap();
    wizard.advance().unwrap();
    fill_solo(&mut wizard);
    wizard.advance().unwrap();
    harness.pay_handler().handle(&mut wizard).await.unwrap();
    wizard.advance().unwrap();

    let result = harness
        .submit_handler(SheetsRelayConfig {
            enabled: true,
            web_app_url: Some(server.uri()),
            timeout: Duration::from_secs(5),
        })
        .handle(&mut wizard)
        .await
        .unwrap();

    assert!(matches!(result.relay, RelayOutcome::Failed(_)));
    assert_eq!(harness.store.list_all().await.unwrap(), vec![result.record]);
    assert_eq!(wizard.step(), WizardStep::Completed);
}

#[tokio::test]
async fn start_over_resets_regardless_of_progress() {
    let harness = Harness::new();
    let start_over = StartOverHandler::new(harness.store.clone());

    // Mid-way through payment
    let mut wizard = harness.wizard();
    wizard.select_offering(&offering_id("x")).unwrap();
    wizard.advance().unwrap();
    fill_solo(&mut wizard);
    wizard.advance().unwrap();
    harness.pay_handler().handle(&mut wizard).await.unwrap();

    let result = start_over.handle(&mut wizard).await.unwrap();

    assert_eq!(result.registration_count, 0);
    assert_eq!(wizard.step(), WizardStep::SportSelection);
    assert!(wizard.selected_offering().is_none());
    assert!(wizard.payment_proof().is_none());

    // After a completed submit
    wizard.select_offering(&offering_id("x")).unwrap();
    wizard.advance().unwrap();
    fill_solo(&mut wizard);
    wizard.advance().unwrap();
    harness.pay_handler().handle(&mut wizard).await.unwrap();
    wizard.advance().unwrap();
    harness
        .submit_handler(disabled_relay())
        .handle(&mut wizard)
        .await
        .unwrap();

    let result = start_over.handle(&mut wizard).await.unwrap();

    assert_eq!(result.registration_count, 1);
    assert_eq!(wizard.step(), WizardStep::SportSelection);
    assert!(wizard.selected_offering().is_none());
    assert!(wizard.payment_proof().is_none());
    assert!(wizard.receipt().is_none());
}
