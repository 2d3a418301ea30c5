//! Markdown receipt renderer.
//!
//! Writes one `Receipt_<receipt id>.md` per paid registration into the
//! configured output directory.

use async_trait::async_trait;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::Timestamp;
use crate::domain::registration::{Receipt, RegistrationDraft, NOT_APPLICABLE};
use crate::domain::wizard::PaymentProof;
use crate::ports::{ReceiptError, ReceiptRenderer};

/// Header lines and output location for receipts.
#[derive(Debug, Clone)]
pub struct ReceiptLayout {
    pub output_dir: PathBuf,
    pub institution: String,
    pub organizer: String,
    pub event_title: String,
    /// Adds a test-mode notice when payments run against a test key.
    pub test_mode: bool,
}

#[derive(Debug, Clone)]
pub struct MarkdownReceiptRenderer {
    layout: ReceiptLayout,
}

impl MarkdownReceiptRenderer {
    pub fn new(layout: ReceiptLayout) -> Self {
        Self { layout }
    }

    /// Path a receipt with the given id is written to.
    pub fn receipt_path(&self, receipt: &Receipt) -> PathBuf {
        self.layout
            .output_dir
            .join(format!("Receipt_{}.md", receipt.receipt_id))
    }

    pub fn output_dir(&self) -> &Path {
        &self.layout.output_dir
    }

    /// Renders the receipt body.
    pub fn render_markdown(
        &self,
        receipt: &Receipt,
        draft: &RegistrationDraft,
        proof: &PaymentProof,
    ) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        let layout = &self.layout;

        writeln!(out, "# {}", layout.institution)?;
        writeln!(out)?;
        writeln!(out, "**{}**", layout.organizer)?;
        writeln!(out)?;
        writeln!(out, "## {}", layout.event_title)?;
        writeln!(out)?;
        writeln!(out, "- Receipt ID: `{}`", receipt.receipt_id)?;
        writeln!(out, "- Date: {}", receipt.generated_at.to_display_ist())?;
        writeln!(out)?;
        writeln!(out, "> PAYMENT SUCCESSFUL")?;
        writeln!(out)?;

        writeln!(out, "### Sport Details")?;
        writeln!(out)?;
        writeln!(out, "| | |")?;
        writeln!(out, "|---|---|")?;
        writeln!(out, "| Sport Name | {} {} |", draft.icon, cell(&draft.sport_name))?;
        writeln!(
            out,
            "| Category | {} ({}) |",
            capitalize(draft.category.as_str()),
            draft.gender.as_str().to_uppercase()
        )?;
        writeln!(out, "| Game Type | {} |", capitalize(draft.game_type.as_str()))?;
        writeln!(out)?;

        writeln!(out, "### Participant Details")?;
        writeln!(out)?;
        writeln!(out, "| | |")?;
        writeln!(out, "|---|---|")?;
        writeln!(out, "| Team/Participant Name | {} |", cell(&draft.team_name))?;
        writeln!(out, "| Contact Number | {} |", cell(&draft.contact))?;
        writeln!(out, "| Players | {} |", cell(&draft.players_string))?;
        if draft.captain != NOT_APPLICABLE {
            writeln!(out, "| Captain | {} |", cell(&draft.captain))?;
            writeln!(out, "| Vice-Captain | {} |", cell(&draft.vice_captain))?;
        }
        writeln!(out)?;

        writeln!(out, "### Payment Details")?;
        writeln!(out)?;
        writeln!(out, "| | |")?;
        writeln!(out, "|---|---|")?;
        writeln!(out, "| Entry Fee | ₹{} |", draft.entry_fee)?;
        writeln!(out, "| Payment Status | {} |", proof.status)?;
        writeln!(out, "| Payment ID | {} |", cell(&proof.external_payment_id))?;
        writeln!(out)?;
        writeln!(out, "**TOTAL AMOUNT PAID: ₹{}**", proof.amount)?;
        writeln!(out)?;

        if layout.test_mode {
            writeln!(out, "_TEST MODE PAYMENT - NO REAL MONEY TRANSACTION_")?;
            writeln!(out)?;
        }
        writeln!(
            out,
            "This is a computer-generated receipt and does not require a signature."
        )?;
        writeln!(out, "Please preserve this receipt for your records.")?;
        write!(out, "For queries, contact the {} office.", layout.organizer)?;
        writeln!(out)?;

        Ok(out)
    }
}

/// Makes free text safe inside a table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[async_trait]
impl ReceiptRenderer for MarkdownReceiptRenderer {
    async fn render(
        &self,
        draft: &RegistrationDraft,
        proof: &PaymentProof,
    ) -> Result<Receipt, ReceiptError> {
        if !proof.is_confirmed() {
            return Err(ReceiptError::PaymentNotConfirmed);
        }

        let receipt = Receipt::issue(Timestamp::now());
        let body = self
            .render_markdown(&receipt, draft, proof)
            .map_err(|e| ReceiptError::RenderFailed(e.to_string()))?;

        fs::create_dir_all(&self.layout.output_dir)
            .await
            .map_err(|e| ReceiptError::IoError(e.to_string()))?;
        let path = self.receipt_path(&receipt);
        fs::write(&path, body)
            .await
            .map_err(|e| ReceiptError::IoError(format!("{}: {}", path.display(), e)))?;

        tracing::info!(
            receipt_id = %receipt.receipt_id,
            path = %path.display(),
            "Receipt generated"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Gender;
    use crate::domain::registration::test_support::draft;
    use crate::domain::wizard::PaymentStatus;
    use tempfile::TempDir;

    fn renderer(dir: &Path, test_mode: bool) -> MarkdownReceiptRenderer {
        MarkdownReceiptRenderer::new(ReceiptLayout {
            output_dir: dir.join("receipts"),
            institution: "Bharat College of Engineering".to_string(),
            organizer: "Student Council".to_string(),
            event_title: "Sports Event Registration Receipt".to_string(),
            test_mode,
        })
    }

    fn proof(status: PaymentStatus) -> PaymentProof {
        PaymentProof {
            external_payment_id: "pay_123".to_string(),
            status,
            amount: 100,
            recorded_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn writes_receipt_file_with_sections() {
        let dir = TempDir::new().unwrap();
        let r = renderer(dir.path(), true);
        let d = draft("chess", Gender::Girls);

        let receipt = r.render(&d, &proof(PaymentStatus::Success)).await.unwrap();
        assert!(receipt.receipt_id.as_str().starts_with("REC-"));

        let body = std::fs::read_to_string(r.receipt_path(&receipt)).unwrap();
        assert!(body.contains("# Bharat College of Engineering"));
        assert!(body.contains("| Category | Outdoor (GIRLS) |"));
        assert!(body.contains("| Players | Rahul |"));
        assert!(body.contains("| Payment ID | pay_123 |"));
        assert!(body.contains("TEST MODE"));
        assert!(!body.contains("| Captain |"));
    }

    #[tokio::test]
    async fn unconfirmed_payment_gets_no_receipt() {
        let dir = TempDir::new().unwrap();
        let r = renderer(dir.path(), false);
        let err = r
            .render(&draft("chess", Gender::Boys), &proof(PaymentStatus::Failed))
            .await
            .unwrap_err();
        assert!(matches!(err, ReceiptError::PaymentNotConfirmed));
        assert!(!r.output_dir().exists());
    }

    #[test]
    fn team_receipt_lists_captains() {
        let dir = TempDir::new().unwrap();
        let r = renderer(dir.path(), false);
        let mut d = draft("relay", Gender::Boys);
        d.captain = "Asha".to_string();
        d.vice_captain = "Ravi".to_string();

        let body = r
            .render_markdown(
                &Receipt::issue(Timestamp::now()),
                &d,
                &proof(PaymentStatus::Success),
            )
            .unwrap();
        assert!(body.contains("| Captain | Asha |"));
        assert!(body.contains("| Vice-Captain | Ravi |"));
        assert!(!body.contains("TEST MODE"));
    }

    #[test]
    fn pipes_in_names_stay_inside_their_cell() {
        let dir = TempDir::new().unwrap();
        let r = renderer(dir.path(), false);
        let mut d = draft("chess", Gender::Boys);
        d.team_name = "Kings | Queens".to_string();
        d.players_string = "Asha\nRavi".to_string();

        let body = r
            .render_markdown(
                &Receipt::issue(Timestamp::now()),
                &d,
                &proof(PaymentStatus::Success),
            )
            .unwrap();
        assert!(body.contains("| Team/Participant Name | Kings \\| Queens |"));
        assert!(body.contains("| Players | Asha Ravi |"));
    }
}
