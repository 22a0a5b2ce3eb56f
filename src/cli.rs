// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{ Args, Parser, Subcommand, ValueEnum };

use crate::config::{ consts::*, Delim, Discovery, RunOptions };
use crate::core::HttpFetcher;
use crate::error::Result;
use crate::progress::LogProgress;

#[derive(Debug, Parser)]
#[command(name = "data_table_deps", version, about = "List the Galaxy data tables each toolshed tool depends on")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Warnings and errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also append log lines to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Augment a tool inventory with a data tables column
    Run(RunArgs),
    /// Print the data tables of one tool, e.g. toolshed.g2.bx.psu.edu/repos/iuc/bakta/bakta
    Lookup(LookupArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Host that raw-file paths from the listing are joined onto
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Remember fetched definitions by URL for the rest of the run
    #[arg(long)]
    pub cache: bool,

    /// Skip the file listing; fetch only <repo>/raw-file/tip/<tool>.xml
    #[arg(long)]
    pub direct: bool,

    /// Per-request timeout; waits forever when unset
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Tool inventory (header row required)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output path [default: <input-stem>+tables.<ext>]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Field delimiter of input and output
    #[arg(long, value_enum, default_value_t = FormatArg::Tsv)]
    pub format: FormatArg,

    /// Column holding <host>/<path>/<tool-name>/<version>
    #[arg(long, default_value = TOOL_ID_COLUMN)]
    pub tool_id_column: String,

    /// Name of the appended column
    #[arg(long, default_value = TABLES_FIELD_NAME)]
    pub field_name: String,

    /// Stop after this many processed rows
    #[arg(long)]
    pub limit: Option<usize>,

    /// Zero-based row index to resume from; earlier rows are not written
    #[arg(long, default_value_t = DEFAULT_START_AT)]
    pub start_at: usize,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Versionless tool id: <host>/<path>/<tool-name>
    pub gxid: String,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

impl FetchArgs {
    fn apply(&self, opts: &mut RunOptions) {
        opts.base_url = self.base_url.clone();
        opts.use_cache = self.cache;
        opts.discovery = if self.direct { Discovery::Direct } else { Discovery::Listing };
    }

    fn fetcher(&self) -> Result<HttpFetcher> {
        HttpFetcher::new(self.timeout_secs.map(Duration::from_secs))
    }
}

impl RunArgs {
    pub fn to_options(&self) -> RunOptions {
        let mut opts = RunOptions::default();
        opts.input = self.input.clone();
        if let Some(out) = &self.output {
            opts.set_output(out);
        }
        opts.format = match self.format {
            FormatArg::Csv => Delim::Csv,
            FormatArg::Tsv => Delim::Tsv,
        };
        opts.tool_id_column = self.tool_id_column.clone();
        opts.field_name = self.field_name.clone();
        opts.limit = self.limit;
        opts.start_at = self.start_at;
        self.fetch.apply(&mut opts);
        opts
    }
}

impl LookupArgs {
    pub fn to_options(&self) -> RunOptions {
        let mut opts = RunOptions::default();
        self.fetch.apply(&mut opts);
        opts
    }
}

/// Parse `std::env::args`, set up logging, and dispatch.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

pub fn execute(cli: Cli) -> Result<()> {
    let level = crate::log::level_from_flags(cli.verbose, cli.quiet);
    crate::log::init(level, cli.log_file.as_deref())?;

    dispatch(cli.command)
}

fn dispatch(command: Command) -> Result<()> {
    dispatch_inner(command).inspect_err(|e| loge!("Run aborted: {e}"))
}

fn dispatch_inner(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => {
            let opts = args.to_options();
            let fetcher = args.fetch.fetcher()?;
            let mut progress = LogProgress::default();
            let summary = crate::runner::run(&opts, fetcher, Some(&mut progress))?;
            println!("Wrote {} ({} rows)", summary.output.display(), summary.processed);
        }
        Command::Lookup(args) => {
            let opts = args.to_options();
            let fetcher = args.fetch.fetcher()?;
            let tables = crate::runner::lookup(&args.gxid, &opts, fetcher)?;
            println!("Tables:");
            for t in tables {
                println!("{t}");
            }
        }
    }
    Ok(())
}
