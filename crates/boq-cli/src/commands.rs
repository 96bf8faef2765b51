use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

use boq_audit::{PricedPosition, classify_all};
use boq_ingest::{TagMapping, assemble, load_document};

use crate::cli::{AuditArgs, ParseArgs, TagsArgs};
use crate::types::{AuditOutcome, ParseOutcome};

pub fn run_parse(args: &ParseArgs) -> Result<ParseOutcome> {
    let span = info_span!("parse", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mapping = load_mapping(args.tags.as_deref())?;
    let root = load_document(&args.input)
        .with_context(|| format!("load document {}", args.input.display()))?;
    let document = assemble(&root, &mapping);
    info!(
        parsed = document.diagnostics.parsed_count,
        skipped = document.diagnostics.skipped_count(),
        duration_ms = start.elapsed().as_millis(),
        "parse complete"
    );

    if let Some(path) = &args.output {
        write_json(path, &document)?;
    }
    Ok(ParseOutcome {
        input: args.input.clone(),
        output: args.output.clone(),
        document,
    })
}

pub fn run_audit(args: &AuditArgs) -> Result<AuditOutcome> {
    let span = info_span!("audit", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let contents = fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let positions: Vec<PricedPosition> = serde_json::from_str(&contents)
        .with_context(|| format!("parse positions from {}", args.input.display()))?;
    let batch = classify_all(positions);
    info!(
        total = batch.stats.total(),
        red = batch.stats.red,
        duration_ms = start.elapsed().as_millis(),
        "audit complete"
    );

    if let Some(path) = &args.output {
        write_json(path, &batch)?;
    }
    Ok(AuditOutcome {
        input: args.input.clone(),
        output: args.output.clone(),
        batch,
    })
}

pub fn run_tags(args: &TagsArgs) -> Result<TagMapping> {
    load_mapping(args.tags.as_deref())
}

/// Default mapping, or the one read from `path`.
pub fn load_mapping(path: Option<&Path>) -> Result<TagMapping> {
    match path {
        Some(path) => {
            let mapping = TagMapping::load(path).context("load tag mapping")?;
            debug!(path = %path.display(), line_item = %mapping.line_item, "tag mapping loaded");
            Ok(mapping)
        }
        None => Ok(TagMapping::default()),
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("write {}", path.display()))?;
    writeln!(writer).with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    debug!(path = %path.display(), "report written");
    Ok(())
}
