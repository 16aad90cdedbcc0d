// src/cli.rs
use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::config::consts::{DEFAULT_CACHE_DIR, DEFAULT_COUNT, DEFAULT_INPUT};
use crate::config::options::{AppOptions, CacheOptions, OutputFormat};
use crate::scoring::{Scheme, SCHEMES, TOTAL_COACHING};
use crate::{file, runner};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Console,
    Html,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Console => OutputFormat::Console,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

/// Rank Football Manager staff from a Staff Search text export.
#[derive(Debug, Parser)]
#[command(name = "staff-search", version, after_help = include_str!("cli_help.txt"))]
#[command(group(ArgGroup::new("role").multiple(false)))]
pub struct Args {
    /// Input file (pipe-delimited text export)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Number of top candidates to print
    #[arg(short = 'n', long = "number", value_name = "N", default_value_t = DEFAULT_COUNT)]
    pub number: usize,

    /// Reuse (or create) a cleaned copy of the input under --cache-dir
    #[arg(short = 'e', long = "enable-caching")]
    pub enable_caching: bool,

    #[arg(long, value_name = "DIR", default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Scoring scheme by name (see --list-schemes)
    #[arg(short, long, value_name = "SCHEME", group = "role", value_parser = parse_scheme)]
    pub scheme: Option<Scheme>,

    /// Sort by sum of all attributes (default)
    #[arg(short = 'a', long, group = "role")]
    pub overall: bool,

    /// Sort coaches by their max coaching aptitude
    #[arg(short = 'c', long, group = "role")]
    pub coaching: bool,

    /// Sort coaches by their total coaching aptitude
    #[arg(short = 't', long, group = "role")]
    pub total_coaching: bool,

    /// Sort coaches by their goalkeeper coaching aptitude
    #[arg(short = 'g', long, group = "role")]
    pub goalkeeper: bool,

    /// Sort coaches by their fitness coaching aptitude
    #[arg(short = 'f', long, group = "role")]
    pub fitness: bool,

    /// Sort staff by their aptitude as head of youth development
    #[arg(short = 'y', long, group = "role")]
    pub youth_dev: bool,

    /// Sort staff by their aptitude as head coach
    #[arg(short = 'H', long, group = "role")]
    pub head_coach: bool,

    /// Rank by this column instead of the scheme's default
    #[arg(long, value_name = "COLUMN")]
    pub sort: Option<String>,

    #[arg(long, value_enum, default_value_t = FormatArg::Console)]
    pub format: FormatArg,

    /// Write the listing to this file (or directory) instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Print the available schemes and their columns, then exit
    #[arg(long)]
    pub list_schemes: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_scheme(s: &str) -> Result<Scheme, String> {
    s.parse()
}

impl Args {
    fn scheme(&self) -> Scheme {
        if let Some(s) = self.scheme {
            return s;
        }
        if self.coaching || self.total_coaching { Scheme::Coaching }
        else if self.goalkeeper { Scheme::GoalkeeperCoaching }
        else if self.fitness { Scheme::FitnessCoaching }
        else if self.youth_dev { Scheme::HeadYouthDev }
        else if self.head_coach { Scheme::HeadCoach }
        else { Scheme::Overall }
    }

    pub fn into_options(self) -> AppOptions {
        let scheme = self.scheme();
        let format = OutputFormat::from(self.format);
        let sort_by = self
            .sort
            .clone()
            .or_else(|| self.total_coaching.then(|| s!(TOTAL_COACHING)));
        let out = self
            .out
            .as_deref()
            .map(|p| file::resolve_out_path(p, scheme, self.number, format));

        AppOptions {
            input: self.input,
            count: self.number,
            scheme,
            sort_by,
            cache: CacheOptions { enabled: self.enable_caching, dir: self.cache_dir },
            format,
            out,
        }
    }
}

pub fn list_schemes() -> String {
    let mut out = s!();
    for spec in SCHEMES {
        out.push_str(&format!("{:<20} {}\n", spec.name, spec.about));
        let outputs: Vec<&str> = spec.metrics.iter().map(|m| m.name).collect();
        out.push_str(&format!("{:<20} → {} (sort: {})\n", "", outputs.join(", "), spec.sort_by));
    }
    out
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();

    crate::log::init(match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    });

    if args.list_schemes {
        print!("{}", list_schemes());
        return Ok(());
    }

    let options = args.into_options();
    let report = runner::run(&options)?;
    runner::emit(&report, &options)?;
    Ok(())
}
