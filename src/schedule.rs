// src/schedule.rs
// Per-hour outage codes -> per-group / per-date / per-time-range labels.

use std::collections::BTreeMap;

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Time-range label (`"HH:00-HH:00"`) -> semantic status label.
pub type DaySchedule = BTreeMap<String, String>;
/// Calendar date (`"YYYY-MM-DD"`, local time) -> day schedule.
pub type GroupDays = BTreeMap<String, DaySchedule>;

/// The decoded `DisconSchedule.fact` object. `data` maps a decimal unix
/// timestamp to per-group hour tables; hour keys are decimal strings in the
/// domain 1-24. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct RawScheduleDocument {
    #[serde(default)]
    pub update: Option<String>,
    #[serde(default)]
    pub data: BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>,
}

/// The persisted result document.
#[derive(Debug, Serialize)]
pub struct OutputDocument {
    pub fetched_at: String,
    pub update_time: String,
    pub groups: BTreeMap<String, GroupDays>,
}

/// Map a raw per-hour status code to a readable label. Total: codes the
/// site has not taught us yet pass through unchanged.
pub fn normalize_status(code: &str) -> String {
    match code {
        "yes" => "light_on".into(),
        "no" => "light_off".into(),
        "first" => "off_first_30min".into(),
        "second" => "off_second_30min".into(),
        other if other.contains("maybe") => "possible_outage".into(),
        other => other.into(),
    }
}

/// Hour index N in 1..=24 becomes the half-open interval ending at N:00.
fn time_range(hour: u32) -> String {
    format!("{:02}:00-{:02}:00", hour - 1, hour)
}

/// Decimal unix-timestamp key -> local calendar date.
fn timestamp_date(stamp: &str) -> Option<String> {
    let secs: i64 = stamp.parse().ok()?;
    let when = Local.timestamp_opt(secs, 0).single()?;
    Some(when.format("%Y-%m-%d").to_string())
}

/// Build per-group day schedules for the requested groups.
///
/// Pure: output depends only on the inputs. A group absent from a
/// timestamp's table simply contributes nothing for that date; a group with
/// no matched dates at all is absent from the result, and no date ever maps
/// to an empty table. Unparseable timestamp or hour keys are skipped with a
/// warning rather than failing the run.
pub fn build_groups(fact: &RawScheduleDocument, groups: &[String]) -> BTreeMap<String, GroupDays> {
    let mut out: BTreeMap<String, GroupDays> = BTreeMap::new();

    for (stamp, per_group) in &fact.data {
        let Some(date) = timestamp_date(stamp) else {
            warn!(%stamp, "skipping unparseable timestamp key");
            continue;
        };

        for group in groups {
            let Some(hours) = per_group.get(group) else {
                continue;
            };

            let mut day = DaySchedule::new();
            for (hour_str, code) in hours {
                match hour_str.parse::<u32>() {
                    Ok(hour) if (1..=24).contains(&hour) => {
                        day.insert(time_range(hour), normalize_status(code));
                    }
                    _ => warn!(%group, hour = %hour_str, "skipping out-of-domain hour key"),
                }
            }
            if day.is_empty() {
                continue;
            }
            // Two timestamps can land on the same local date; merge them.
            out.entry(group.clone())
                .or_default()
                .entry(date.clone())
                .or_default()
                .extend(day);
        }
    }

    out
}
