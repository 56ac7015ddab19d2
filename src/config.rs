// src/config.rs

use std::path::PathBuf;

// Source page
pub const SOURCE_URL: &str = "https://www.dtek-dnem.com.ua/ua/shutdowns";
pub const FACT_MARKER: &str = "DisconSchedule.fact = {";
pub const PRESET_MARKER: &str = "DisconSchedule.preset = {";

// Content-plausibility guard: a challenge page is short and never mentions
// the schedule object.
pub const MIN_CONTENT_BYTES: usize = 1000;
pub const CONTENT_SENTINEL: &str = "DisconSchedule";

// Net
pub const FETCH_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("dtek_scrape/", env!("CARGO_PKG_VERSION"));

// Output
pub const DEFAULT_OUT_FILE: &str = "dtek_schedule.json";

// Distribution-zone queues to extract, in report order.
pub const DEFAULT_GROUPS: &[&str] = &[
    "GPV1.1", "GPV1.2", "GPV2.1", "GPV2.2", "GPV3.1", "GPV3.2",
    "GPV4.1", "GPV4.2", "GPV5.1", "GPV5.2", "GPV6.1", "GPV6.2",
];

/// Everything one run needs. Built from the defaults above, then overridden
/// by CLI flags; tests construct it directly with fixture values.
#[derive(Clone, Debug)]
pub struct Config {
    pub url: String,                // source page URL
    pub out: PathBuf,               // output file path
    pub groups: Vec<String>,        // group ids, report order
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: SOURCE_URL.to_string(),
            out: PathBuf::from(DEFAULT_OUT_FILE),
            groups: DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect(),
        }
    }
}
