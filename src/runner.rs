// src/runner.rs
// Linear fetch -> extract -> decode -> build -> persist pipeline, fail-fast.

use std::path::PathBuf;

use chrono::{Local, SecondsFormat};
use tracing::{debug, info, warn};

use crate::{
    config::{CONTENT_SENTINEL, Config, FACT_MARKER, MIN_CONTENT_BYTES, PRESET_MARKER},
    core::{extract::extract_object, net::Fetcher},
    error::ScrapeError,
    file,
    schedule::{self, OutputDocument, RawScheduleDocument},
};

/// What a successful run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub document: OutputDocument,
}

/// One complete fetch-parse-format-persist cycle.
///
/// Any failure up to and including JSON decoding aborts the run; nothing is
/// written in that case. Only the preset block is allowed to be missing: it
/// degrades to an empty object.
pub fn run(config: &Config, fetcher: &dyn Fetcher) -> Result<RunSummary, ScrapeError> {
    info!(url = %config.url, "fetching shutdowns page");
    let page = fetcher.fetch(&config.url)?;
    if page.status != 200 {
        return Err(ScrapeError::Fetch {
            status: page.status,
        });
    }
    if page.body.len() < MIN_CONTENT_BYTES || !page.body.contains(CONTENT_SENTINEL) {
        return Err(ScrapeError::ProtectionDetected {
            size: page.body.len(),
        });
    }
    info!(bytes = page.body.len(), "page received");

    let fact_raw = extract_object(&page.body, FACT_MARKER)?;
    let preset_raw = match extract_object(&page.body, PRESET_MARKER) {
        Ok(block) => Some(block),
        Err(e) => {
            warn!("preset block unavailable: {e}");
            None
        }
    };

    let fact: RawScheduleDocument = serde_json::from_str(fact_raw)
        .map_err(|source| ScrapeError::Decode { block: "fact", source })?;
    let preset: serde_json::Value = match preset_raw {
        Some(block) => serde_json::from_str(block)
            .map_err(|source| ScrapeError::Decode { block: "preset", source })?,
        None => serde_json::Value::Object(Default::default()),
    };
    debug!(
        entries = preset.as_object().map_or(0, |o| o.len()),
        "preset block decoded"
    );

    let groups = schedule::build_groups(&fact, &config.groups);
    let document = OutputDocument {
        fetched_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        update_time: fact.update.unwrap_or_else(|| "unknown".into()),
        groups,
    };

    file::write_output(&config.out, &document)?;
    info!(
        path = %config.out.display(),
        groups = document.groups.len(),
        "schedule written"
    );

    Ok(RunSummary {
        path: config.out.clone(),
        document,
    })
}
