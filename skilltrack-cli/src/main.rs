mod file_store;
mod reports;
mod script;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use regex::Regex;
use std::fs::File;
use std::io::{BufWriter, Read, Write, stdin, stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use file_store::FileFragmentStore;
use reports::{CheckReport, StateReport};
use skilltrack_core::{
    AssessmentState, FIELD_SEPARATOR, FragmentStore, MemoryFragmentStore, StateController,
    TRACK_COUNT, TitleCatalog, decode, encode, inspect,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable, colored when the terminal supports it
    Console,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "skilltrack", version = "0.1.0")]
#[command(about = "Decode, validate, and script edits to Skilltrack assessment fragments")]
struct Args {
    /// Title catalog JSON to use instead of the bundled one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console, global = true)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a fragment and show the assessment it describes
    Decode {
        /// Fragment, with or without the leading '#'
        #[arg(allow_hyphen_values = true)]
        fragment: String,
    },
    /// Encode assessment JSON into a fragment
    Encode {
        /// JSON file, or '-' for stdin
        input: String,
    },
    /// Report how a fragment deviates from its canonical form
    Check {
        #[arg(allow_hyphen_values = true)]
        fragment: String,
        /// Exit non-zero unless the fragment is already canonical
        #[arg(long)]
        strict: bool,
    },
    /// List titles a fragment qualifies for, with its point summary
    Titles {
        #[arg(allow_hyphen_values = true)]
        fragment: String,
    },
    /// Apply edit ops to a fragment kept in a file
    Edit {
        /// File holding the fragment; created when missing
        #[arg(long)]
        file: PathBuf,
        /// Show the result without rewriting the file
        #[arg(long)]
        dry_run: bool,
        /// Ops such as name=Ada, set=AGILE:4, next, up
        #[arg(required = true, allow_hyphen_values = true)]
        ops: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let catalog = load_catalog(args.catalog.as_deref())?;
    let mut output_target = OutputTarget::new(args.output.clone())?;

    let status = match &args.command {
        Command::Decode { fragment } => run_decode(&args, &catalog, fragment, &mut output_target)?,
        Command::Encode { input } => run_encode(&args, input, &mut output_target)?,
        Command::Check { fragment, strict } => {
            run_check(&args, fragment, *strict, &mut output_target)?
        }
        Command::Titles { fragment } => run_titles(&args, &catalog, fragment, &mut output_target)?,
        Command::Edit {
            file,
            dry_run,
            ops,
        } => run_edit(&args, &catalog, file, *dry_run, ops, &mut output_target)?,
    };

    output_target.flush_inner()?;
    Ok(status)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<TitleCatalog> {
    match path {
        Some(path) => TitleCatalog::from_path(path)
            .with_context(|| format!("failed to load title catalog {}", path.display())),
        None => Ok(TitleCatalog::bundled().clone()),
    }
}

fn require_state(fragment: &str) -> Result<AssessmentState> {
    match decode(fragment) {
        Some(state) => Ok(state),
        None => bail!("fragment is empty: nothing to decode"),
    }
}

fn run_decode(
    args: &Args,
    catalog: &TitleCatalog,
    fragment: &str,
    out: &mut OutputTarget,
) -> Result<ExitCode> {
    let report = StateReport::new(require_state(fragment)?, catalog);
    match args.report {
        ReportFormat::Json => reports::generate_json_report(out, &report)?,
        ReportFormat::Console => reports::generate_state_console(out, &report)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn run_encode(args: &Args, input: &str, out: &mut OutputTarget) -> Result<ExitCode> {
    let json = if input == "-" {
        let mut buf = String::new();
        stdin()
            .read_to_string(&mut buf)
            .context("failed to read assessment JSON from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))?
    };
    let state: AssessmentState =
        serde_json::from_str(&json).context("assessment JSON parsing error")?;
    let fragment = encode(&state);
    match args.report {
        ReportFormat::Json => {
            reports::generate_json_report(out, &serde_json::json!({ "fragment": fragment }))?;
        }
        ReportFormat::Console => writeln!(out, "#{fragment}")?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Regex for a fragment that has exactly the canonical field layout.
fn canonical_shape() -> Result<Regex> {
    let sep = regex::escape(&FIELD_SEPARATOR.to_string());
    Regex::new(&format!(
        "^([0-5]{sep}){{{TRACK_COUNT}}}[^{sep}]*{sep}[^{sep}]*$"
    ))
    .context("building fragment layout pattern")
}

fn check_fragment(fragment: &str) -> Result<CheckReport> {
    let body = fragment.strip_prefix('#').unwrap_or(fragment);
    let decode_report = inspect(fragment);
    Ok(CheckReport {
        input: fragment.to_string(),
        shape_matches: canonical_shape()?.is_match(body),
        canonical: decode_report
            .as_ref()
            .is_some_and(skilltrack_core::FragmentReport::is_canonical),
        normalized: decode(fragment).map(|state| encode(&state)),
        decode: decode_report,
    })
}

fn run_check(args: &Args, fragment: &str, strict: bool, out: &mut OutputTarget) -> Result<ExitCode> {
    let report = check_fragment(fragment)?;
    match args.report {
        ReportFormat::Json => reports::generate_json_report(out, &report)?,
        ReportFormat::Console => reports::generate_check_console(out, &report)?,
    }
    if strict && !report.canonical {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_titles(
    args: &Args,
    catalog: &TitleCatalog,
    fragment: &str,
    out: &mut OutputTarget,
) -> Result<ExitCode> {
    let report = StateReport::new(require_state(fragment)?, catalog);
    match args.report {
        ReportFormat::Json => reports::generate_json_report(out, &report)?,
        ReportFormat::Console => reports::generate_titles_console(out, &report)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn run_edit(
    args: &Args,
    catalog: &TitleCatalog,
    file: &Path,
    dry_run: bool,
    ops: &[String],
    out: &mut OutputTarget,
) -> Result<ExitCode> {
    let mutations = script::parse_script(ops)?;

    let state = if dry_run {
        let disk = FileFragmentStore::new(file);
        let store = disk
            .read()
            .map_or_else(MemoryFragmentStore::new, MemoryFragmentStore::with_fragment);
        apply_edits(StateController::load(store, catalog.clone()), &mutations)
    } else {
        let mut controller = StateController::load(FileFragmentStore::new(file), catalog.clone());
        for mutation in &mutations {
            controller.dispatch(mutation);
        }
        ensure_all_written(controller.store(), mutations.len() + 1)?;
        controller.into_parts().0
    };

    let report = StateReport::new(state, catalog);
    match args.report {
        ReportFormat::Json => reports::generate_json_report(out, &report)?,
        ReportFormat::Console => {
            if dry_run {
                writeln!(out, "{}", "🔍 Dry run: file left unchanged".yellow())?;
            }
            reports::generate_state_console(out, &report)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn ensure_all_written(store: &FileFragmentStore, expected: usize) -> Result<()> {
    if store.writes() != expected {
        bail!(
            "{} was not fully updated ({} of {expected} writes succeeded)",
            store.path().display(),
            store.writes()
        );
    }
    Ok(())
}

fn apply_edits<S: FragmentStore>(
    mut controller: StateController<S, TitleCatalog>,
    mutations: &[skilltrack_core::Mutation],
) -> AssessmentState {
    for mutation in mutations {
        controller.dispatch(mutation);
    }
    controller.into_parts().0
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
