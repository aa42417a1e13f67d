use crate::classify::{Classification, Tally};
use crate::event::{KillEvent, REDACTED, format};
use crate::scan::FileLogSource;
use crate::session::{Evaluated, ScanSession};
use crate::settings::{ModeFlags, MonitorSettings};
use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// One-shot scan of a log file, printed instead of monitored.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Path to the game log
    pub log: PathBuf,

    /// Player handle to track
    #[arg(long)]
    pub handle: String,

    /// Include self-kills and NPC events
    #[arg(long)]
    pub show_all: bool,

    /// Count kills made by the handle
    #[arg(long)]
    pub killer_mode: bool,

    /// Hide killer names
    #[arg(long)]
    pub redact: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    fn settings(&self) -> MonitorSettings {
        MonitorSettings::new(self.handle.trim(), &self.log).with_modes(ModeFlags {
            show_all: self.show_all,
            killer_mode: self.killer_mode,
            streamer_mode: self.redact,
            write_to_file: false,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub handle: String,
    pub log: PathBuf,
    pub events: Vec<ReportEntry>,
    pub tally: Tally,
}

#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub classification: Classification,
    #[serde(flatten)]
    pub event: KillEvent,
}

/// Scan once and classify everything found, newest first.
pub fn collect(args: &ScanArgs) -> anyhow::Result<ScanReport> {
    let settings = args.settings();
    let mut session = ScanSession::new();

    session
        .scan(&FileLogSource, &settings, None)
        .with_context(|| format!("failed to scan {}", settings.log_path.display()))?;

    let events = session
        .evaluate_pending(&settings)
        .into_iter()
        .map(|Evaluated { mut event, classification, .. }| {
            if args.redact {
                event.killer = REDACTED.to_string();
            }
            ReportEntry {
                classification,
                event,
            }
        })
        .collect();

    Ok(ScanReport {
        handle: settings.handle,
        log: settings.log_path,
        events,
        tally: session.tally(),
    })
}

pub fn run(args: ScanArgs) -> anyhow::Result<()> {
    let report = collect(&args)?;
    let stdout = io::stdout();
    write_report(&report, args.json, &mut stdout.lock())
}

/// Render `report` to `out`: one JSON document, or human-readable records plus the tally.
pub fn write_report(report: &ScanReport, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    for entry in &report.events {
        let label = match entry.classification {
            Classification::Kill => "KILL",
            _ => "DEATH",
        };
        writeln!(out, "[{label}]")?;
        // Killer is already redacted in the report.
        writeln!(out, "{}", format(&entry.event, false))?;
        writeln!(out)?;
    }
    writeln!(
        out,
        "{} events, kills: {}, deaths: {}",
        report.events.len(),
        report.tally.kills,
        report.tally.deaths
    )?;

    Ok(())
}
