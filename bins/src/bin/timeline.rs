// SPDX-License-Identifier: MIT

//!
//! A small CLI for inspecting the MythicAges era parser and timeline scale:
//! feed it the free-text date expressions from the site content and it
//! reports the resolved year ranges and where they land on the axis
//!

use clap::Parser;
use mythic_timeline_core::{age_containing, parse_era_string};
use mythic_timeline_scale::TimelineScale;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};

#[macro_use]
extern crate log;
extern crate simplelog;

/// Resolve free-text era expressions against the MythicAges timeline
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The era expressions to resolve (e.g. "c. 3rd century BCE", "1920s")
    #[arg(required = true)]
    expressions: Vec<String>,

    /// Log parser traces as well
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("mythic_timeline")
        .build();

    let level = if args.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };

    CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    let scale = TimelineScale::new();

    for expression in &args.expressions {
        match parse_era_string(expression) {
            Some(era) => {
                let midpoint = era.midpoint();
                let age = age_containing(midpoint);
                info!(
                    "{expression:?} -> {} to {} ({}, midpoint {} at {:.1}% along the axis)",
                    era.start_year(),
                    era.end_year(),
                    age.label,
                    midpoint,
                    scale.year_to_position(midpoint),
                );
            }
            None => {
                // Undated content fails open: it's included, just unplaced
                info!("{expression:?} -> undated");
            }
        }
    }
}
