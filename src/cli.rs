// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, eyre, Result};
use log::LevelFilter;

use crate::{
    collect::{self, FixedDelay},
    config::{
        consts::{API_BASE, REQUEST_PAUSE_MS, TIMEOUT_SECS},
        options::{AppOptions, ExportFormat},
    },
    csv,
    file,
    lookup,
    openalex::{FunderCandidate, OpenAlexClient},
    progress::{self, Progress},
};

#[derive(Parser, Debug)]
#[command(
    name = "grant_finder_cli",
    version,
    about = "Find grant award IDs for a funder on OpenAlex"
)]
pub struct CliArgs {
    #[arg(long, value_name = "URL", default_value = API_BASE, global = true,
          help = "OpenAlex API base URL")]
    pub api_base: String,
    #[arg(long, value_name = "EMAIL", global = true,
          help = "Contact address sent as mailto= (OpenAlex polite pool)")]
    pub mailto: Option<String>,
    #[arg(long, value_name = "SECS", default_value_t = TIMEOUT_SECS, global = true,
          help = "Per-request timeout")]
    pub timeout: u64,
    #[arg(long, value_name = "MS", default_value_t = REQUEST_PAUSE_MS, global = true,
          help = "Pause between page requests")]
    pub delay_ms: u64,
    #[arg(long, global = true, help = "Route requests through HTTP(S)_PROXY from the environment")]
    pub env_proxy: bool,
    #[arg(short, long, action = ArgAction::Count, global = true,
          help = "Log more to .store/debug.log (-v info, -vv debug)")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List funders matching a query
    Search {
        query: String,
    },
    /// Collect grant IDs for a funder and write them as a table
    Grants(GrantsArgs),
}

#[derive(Args, Debug)]
pub struct GrantsArgs {
    /// Funder search query (omit when passing --funder-id/--funder-name)
    #[arg(required_unless_present = "funder_id", conflicts_with = "funder_id")]
    pub query: Option<String>,
    #[arg(long, value_name = "ID", requires = "funder_name",
          help = "Funder identifier, skips the lookup")]
    pub funder_id: Option<String>,
    #[arg(long, value_name = "NAME", requires = "funder_id",
          help = "Funder display name, matched exactly against grant entries")]
    pub funder_name: Option<String>,
    #[arg(long, value_name = "N", help = "Take the N-th candidate (1-based) instead of prompting")]
    pub pick: Option<usize>,
    #[arg(short, long, value_name = "PATH", help = "Output file (default: out/grant_ids.<ext>)")]
    pub out: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,
    #[arg(long, help = "Omit the Grant ID header row")]
    pub no_headers: bool,
    #[arg(long, help = "Print the table to stdout instead of writing a file")]
    pub stdout: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

impl CliArgs {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Defaults overridden by flags.
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.api.base_url = self.api_base.clone();
        opts.api.mailto = self.mailto.clone();
        opts.api.timeout_secs = self.timeout;
        opts.api.pause_ms = self.delay_ms;
        opts.api.env_proxy = self.env_proxy;

        if let Command::Grants(g) = &self.command {
            opts.export.format = g.format.into();
            opts.export.include_headers = !g.no_headers;
            if let Some(out) = &g.out {
                opts.export.set_path(&out.to_string_lossy());
            }
        }
        opts
    }
}

/// Progress line on stderr, redrawn in place.
struct CliProgress;

impl Progress for CliProgress {
    fn page_done(&mut self, retrieved: u64, total: u64) {
        let pct = progress::fraction(retrieved, total) * 100.0;
        eprint!("\rFetching grants... {retrieved}/{total} ({pct:.0}%)");
        let _ = io::stderr().flush();
    }
    fn finish(&mut self) {
        eprintln!();
    }
}

pub fn run(args: CliArgs) -> Result<()> {
    let opts = args.options();
    let mut client = OpenAlexClient::new(&opts.api);

    match &args.command {
        Command::Search { query } => {
            let found = lookup::search_funders(&mut client, query)?;
            if found.is_empty() {
                eprintln!("No funders found for {query:?}.");
            }
            for (i, f) in found.iter().enumerate() {
                println!("{}\t{}\t{}", i + 1, f.identifier, f.label());
            }
            Ok(())
        }
        Command::Grants(g) => {
            let funder = match (&g.funder_id, &g.funder_name) {
                (Some(id), Some(name)) => FunderCandidate::new(id.as_str(), name.as_str()),
                _ => {
                    let query = g.query.as_deref().unwrap_or_default();
                    let found = lookup::search_funders(&mut client, query)?;
                    match choose_funder(&found, g.pick, &mut io::stdin().lock())? {
                        Some(f) => f.clone(),
                        None => {
                            eprintln!("No funders found for {query:?}.");
                            return Ok(());
                        }
                    }
                }
            };

            eprintln!("Funder: {} ({})", funder.display_name, funder.identifier);
            let mut pacer = FixedDelay(opts.api.pause());
            let ids = collect::collect_grant_ids(
                &mut client,
                &mut pacer,
                &funder.identifier,
                &funder.display_name,
                Some(&mut CliProgress),
            )?;

            if ids.is_empty() {
                eprintln!("No grant IDs found for this funder.");
                return Ok(());
            }

            let export = &opts.export;
            if g.stdout {
                print!("{}", csv::to_export_string(ids.iter(), export.include_headers, export.delim()));
            } else {
                let path = file::write_export(export, &ids)
                    .map_err(|e| eyre!("Export error: {e}"))?;
                eprintln!("Wrote {} grant ID(s) to {}", ids.len(), path.display());
            }
            Ok(())
        }
    }
}

/// Pick a candidate: `--pick` wins, a single hit is taken as-is, otherwise
/// prompt on stderr and read a 1-based index from `input`.
fn choose_funder<'a, R: BufRead>(
    found: &'a [FunderCandidate],
    pick: Option<usize>,
    input: &mut R,
) -> Result<Option<&'a FunderCandidate>> {
    if found.is_empty() {
        return Ok(None);
    }
    if let Some(n) = pick {
        return match n.checked_sub(1).and_then(|i| found.get(i)) {
            Some(f) => Ok(Some(f)),
            None => bail!("--pick {n} is out of range (1..={})", found.len()),
        };
    }
    if found.len() == 1 {
        return Ok(found.first());
    }

    for (i, f) in found.iter().enumerate() {
        eprintln!("{:>3}. {}", i + 1, f.label());
    }
    eprint!("Select a funder [1-{}]: ", found.len());
    io::stderr().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("No selection made");
    }
    let n: usize = line.trim().parse().map_err(|_| eyre!("Not a number: {}", line.trim()))?;
    match n.checked_sub(1).and_then(|i| found.get(i)) {
        Some(f) => Ok(Some(f)),
        None => bail!("Selection {n} is out of range (1..={})", found.len()),
    }
}
