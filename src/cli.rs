// src/cli.rs

use std::{env, error::Error, path::PathBuf};

use chrono::Local;

use crate::{
    config::Config,
    core::net::HttpFetcher,
    runner::{self, RunSummary},
    schedule::DaySchedule,
};

pub fn run() -> Result<(), Box<dyn Error>> {
    let config = parse_cli()?;
    let fetcher = HttpFetcher::new()?;
    let summary = runner::run(&config, &fetcher)?;
    print_summary(&config, &summary);
    Ok(())
}

fn parse_cli() -> Result<Config, Box<dyn Error>> {
    let mut config = Config::default();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => config.url = args.next().ok_or("Missing value for --url")?,
            "-o" | "--out" => {
                config.out = PathBuf::from(args.next().ok_or("Missing output path")?)
            }
            "--groups" => {
                let v = args.next().ok_or("Missing value for --groups")?;
                config.groups = parse_groups_list(&v)?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(config)
}

/// Comma-separated group ids; order kept, duplicates dropped.
fn parse_groups_list(s: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let mut out: Vec<String> = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !out.iter().any(|g| g == part) {
            out.push(part.to_string());
        }
    }
    if out.is_empty() {
        return Err("No group ids in --groups".into());
    }
    Ok(out)
}

/// Short human report: where the file went, what the site claims, and
/// today's on/off ranges for the first configured group that has data.
fn print_summary(config: &Config, summary: &RunSummary) {
    let doc = &summary.document;
    println!("Saved: {}", summary.path.display());
    println!("Site update time: {}", doc.update_time);
    println!("Groups with data: {}", doc.groups.len());

    let today = Local::now().format("%Y-%m-%d").to_string();
    let Some((group, days)) = config
        .groups
        .iter()
        .find_map(|g| doc.groups.get_key_value(g))
    else {
        return;
    };
    let Some(day) = days.get(&today) else {
        return;
    };

    println!("{group} today ({today}):");
    print_ranges("  on: ", day, "light_on");
    print_ranges("  off:", day, "light_off");
}

fn print_ranges(label: &str, day: &DaySchedule, status: &str) {
    let ranges: Vec<&str> = day
        .iter()
        .filter(|(_, v)| v.as_str() == status)
        .map(|(k, _)| k.as_str())
        .collect();
    if ranges.is_empty() {
        return;
    }
    // BTreeMap iteration is already sorted; show the first few.
    let shown = ranges.iter().take(5).copied().collect::<Vec<_>>().join(", ");
    let suffix = if ranges.len() > 5 { ", ..." } else { "" };
    println!("{label} {shown}{suffix}");
}
