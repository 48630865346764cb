use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use blitz_unicode::{UnicodeDataBuilder, UnicodeDataProvider};
use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::Env;
use owo_colors::OwoColorize;
use serde::Serialize;
use unicode_conformance::{run_suite, ConformanceSummary, RunnerConfig, RunnerError, RunnerResult, Suite};

#[derive(Debug, Parser)]
#[command(
    name = "unicode-conformance",
    about = "Builds Unicode property blobs and runs the Unicode conformance files against them",
    after_help = "\
Build a blob from an unpacked UCD directory, then run the test files:

  $ unicode-conformance generate ucd/ -o unicode.bin
  $ unicode-conformance run --data unicode.bin --tests ucd/

Suites whose test file is missing from the test directory are skipped."
)]
struct Opt {
    /// Silence all log output
    #[arg(short = 'q', long = "quiet", global = true)]
    quiet: bool,

    /// Verbose logging mode (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a packed property blob from UCD files
    Generate {
        /// Directory holding DerivedBidiClass.txt, Scripts.txt, LineBreak.txt, ...
        #[arg(value_name = "UCD_DIR")]
        ucd_dir: PathBuf,

        /// Where to write the blob
        #[arg(short = 'o', long = "output", value_name = "PATH")]
        output: PathBuf,
    },

    /// Run conformance suites
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Packed property blob to test
    #[arg(long = "data", value_name = "PATH", conflicts_with = "ucd_dir")]
    data: Option<PathBuf>,

    /// Build the property data from a UCD directory instead
    #[arg(long = "ucd-dir", value_name = "DIR")]
    ucd_dir: Option<PathBuf>,

    /// Directory holding the conformance test files
    #[arg(long = "tests", value_name = "DIR")]
    tests: PathBuf,

    /// JSON runner configuration
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Evaluate cases on one thread
    #[arg(long = "sequential")]
    sequential: bool,

    /// Failures kept per suite
    #[arg(long = "max-failures", value_name = "N")]
    max_failures: Option<usize>,

    /// Write a JSON report of every suite
    #[arg(long = "report", value_name = "PATH")]
    report: Option<PathBuf>,

    /// Suite to run; repeat for several (default: all)
    #[arg(long = "suite", value_enum)]
    suites: Vec<Suite>,
}

impl RunArgs {
    fn runner_config(&self) -> RunnerResult<RunnerConfig> {
        let mut config = match &self.config {
            Some(path) => RunnerConfig::from_json_file(path)?,
            None => RunnerConfig::default(),
        };
        if self.sequential {
            config.parallel = false;
        }
        if let Some(max) = self.max_failures {
            config.max_failures_to_log = max;
        }
        Ok(config)
    }

    fn provider(&self) -> RunnerResult<UnicodeDataProvider> {
        match (&self.data, &self.ucd_dir) {
            (Some(path), _) => Ok(UnicodeDataProvider::load_file(path)?),
            (None, Some(dir)) => Ok(UnicodeDataBuilder::from_ucd_dir(dir)?.build()?),
            (None, None) => Err(RunnerError::NoPropertyData),
        }
    }

    fn suites(&self) -> &[Suite] {
        if self.suites.is_empty() {
            &Suite::ALL
        } else {
            &self.suites
        }
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    format_version: u16,
    config: &'a RunnerConfig,
    suites: &'a [ConformanceSummary],
}

fn create(path: &Path) -> RunnerResult<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| RunnerError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn generate(ucd_dir: &Path, output: &Path) -> RunnerResult<()> {
    let blob = UnicodeDataBuilder::from_ucd_dir(ucd_dir)?.encode()?;
    let mut writer = create(output)?;
    writer
        .write_all(&blob)
        .and_then(|()| writer.flush())
        .map_err(|source| RunnerError::Io {
            path: output.to_path_buf(),
            source,
        })?;
    log::info!("Wrote {} bytes to {}", blob.len(), output.display());
    Ok(())
}

fn print_summary(out: &mut impl Write, summary: &ConformanceSummary) -> io::Result<()> {
    let status = if summary.is_success() {
        "PASS".green().bold().to_string()
    } else {
        "FAIL".red().bold().to_string()
    };
    writeln!(
        out,
        "{status} {:<20} {:>8}/{:<8} {:>6.2}%  failed {:<6} skipped {}",
        summary.suite.bold(),
        summary.passed,
        summary.total,
        summary.pass_rate() * 100.0,
        summary.failed,
        summary.skipped
    )?;
    for failure in &summary.failures {
        writeln!(
            out,
            "     {} {}",
            format!("line {}:", failure.line).yellow(),
            failure.message
        )?;
        writeln!(out, "       {}", failure.input.dimmed())?;
    }
    Ok(())
}

/// Returns whether every suite passed.
fn run(args: &RunArgs) -> RunnerResult<bool> {
    let config = args.runner_config()?;
    let data = args.provider()?;

    let mut summaries = Vec::new();
    for &suite in args.suites() {
        let path = args.tests.join(suite.file_name());
        if !path.is_file() {
            log::warn!("{} not found, skipping {suite:?}", path.display());
            continue;
        }
        let text = std::fs::read_to_string(&path).map_err(|source| RunnerError::Io {
            path: path.clone(),
            source,
        })?;
        summaries.push(run_suite(suite, &data, &text, &config));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for summary in &summaries {
        print_summary(&mut out, summary).map_err(|source| RunnerError::Io {
            path: PathBuf::from("<stdout>"),
            source,
        })?;
    }

    if let Some(path) = &args.report {
        let report = Report {
            format_version: data.format_version(),
            config: &config,
            suites: &summaries,
        };
        let mut writer = create(path)?;
        serde_json::to_writer_pretty(&mut writer, &report)?;
        writer.flush().map_err(|source| RunnerError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("Wrote report to {}", path.display());
    }

    Ok(summaries.iter().all(ConformanceSummary::is_success))
}

fn main() -> ExitCode {
    let opt = Opt::parse();

    if !opt.quiet {
        env_logger::Builder::from_env(Env::default().default_filter_or(match opt.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }))
        .format_timestamp(None)
        .init();
    }

    let result = match &opt.command {
        Command::Generate { ucd_dir, output } => generate(ucd_dir, output).map(|()| true),
        Command::Run(args) => run(args),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}
