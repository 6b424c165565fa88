#![allow(missing_docs)]

mod fmt;

use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use clap_verbosity_flag::Verbosity;
use env_logger::Env;
use log::{error, info};
use phrasebook::Phrasebook;
use rayon::prelude::*;

use crate::fmt::{OutputFormat, Summary};

fn main() -> ExitCode {
    match _main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why}");
            ExitCode::FAILURE
        },
    }
}

// Default to debug logs on debug builds, info otherwise
#[cfg(debug_assertions)]
type PhrasebookVerbosity = Verbosity<clap_verbosity_flag::DebugLevel>;
#[cfg(not(debug_assertions))]
type PhrasebookVerbosity = Verbosity<clap_verbosity_flag::InfoLevel>;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The phrasebook JSON file(s) to inspect
    #[arg(required = true)]
    phrasebook_path: Vec<PathBuf>,

    /// The number of categories to show per phrasebook
    #[arg(short = 'n', long = "categories", default_value_t = 5)]
    top_categories: usize,

    /// Fail if any phrasebook has validation issues
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    verbosity: PhrasebookVerbosity,
}

fn _main() -> anyhow::Result<()> {
    let args = Args::parse();
    debug_assert!(!args.phrasebook_path.is_empty());

    env_logger::builder()
        .filter_level(args.verbosity.into())
        .parse_env(Env::new().filter("PHRASEBOOK_LOG"))
        .init();

    let start = Instant::now();
    let summaries = args
        .phrasebook_path
        .par_iter()
        .map(|path| -> anyhow::Result<Summary> {
            let book = Phrasebook::load(path)?;
            let summary = Summary::new(path.clone(), book, args.top_categories);
            info!("checked {}", path.display());
            Ok(summary)
        })
        .collect::<Result<Vec<_>, _>>()?;

    summaries.iter().for_each(|summary| {
        println!("{}", summary.format(OutputFormat::Human));
    });
    info!("Took {:?}", start.elapsed());

    let issue_total: usize =
        summaries.iter().map(Summary::issue_count).sum();
    if args.strict && issue_total > 0 {
        anyhow::bail!(
            "{issue_total} validation issue(s) across {} file(s)",
            summaries.len(),
        );
    }
    Ok(())
}
