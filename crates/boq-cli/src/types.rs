use std::path::PathBuf;

use boq_audit::{AuditLabel, ClassifiedBatch, PricedPosition};
use boq_ingest::ParsedDocument;

#[derive(Debug)]
pub struct ParseOutcome {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub document: ParsedDocument,
}

impl ParseOutcome {
    /// Skipped rows are reported, not failures, so a loaded document exits 0.
    pub fn exit_code(&self) -> i32 {
        0
    }
}

#[derive(Debug)]
pub struct AuditOutcome {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub batch: ClassifiedBatch<PricedPosition>,
}

impl AuditOutcome {
    pub fn has_red(&self) -> bool {
        self.batch.stats.count(AuditLabel::Red) > 0
    }

    /// 1 when `fail_on_red` is set and any position was labelled RED.
    pub fn exit_code(&self, fail_on_red: bool) -> i32 {
        i32::from(fail_on_red && self.has_red())
    }
}
