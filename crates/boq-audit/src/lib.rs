//! Audit risk classification.
//!
//! Assigns each position a [`AuditLabel`] from its classification code and
//! the upstream validation, enrichment and pricing signals, and tallies the
//! labels for a batch.
//!
//! | Precedence | Condition | Label |
//! |------------|-----------|-------|
//! | 1 | code blank, or validation `failed` | RED |
//! | 2 | validation `warning`, enrichment `partial`/`unmatched`, or unit price absent/zero | AMBER |
//! | 3 | otherwise | GREEN |

mod classify;
mod priced;
mod signals;
pub mod status;

pub use boq_model::{AuditLabel, AuditedPosition, ClassificationStats};
pub use classify::{ClassifiedBatch, classify, classify_all};
pub use priced::PricedPosition;
pub use signals::AuditSignals;
