//! Receipt renderer adapters.

mod markdown_receipt_renderer;

pub use markdown_receipt_renderer::{MarkdownReceiptRenderer, ReceiptLayout};
