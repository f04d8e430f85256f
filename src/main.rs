//! nullfill CLI
//!
//! Entry point for the `nullfill` command-line tool.

use clap::{Parser, Subcommand};
use nullfill::{Document, FileInfo, MergeReport, ToolConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "nullfill")]
#[command(about = "Fill null or missing values from defaults", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill TARGET from one or more default SOURCES (first source wins)
    Merge {
        /// Document to fill (JSON or TOML)
        target: PathBuf,

        /// Default documents, in precedence order
        #[arg(required = true)]
        sources: Vec<PathBuf>,

        /// Emit a merge report with provenance instead of the bare result
        #[arg(long)]
        report: bool,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,

        /// Write output to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Path to config file (default: .nullfill.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Print progress to stderr
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// Show extension and kind for each filename
    Inspect {
        /// Filenames or paths (not read from disk)
        #[arg(required = true)]
        filenames: Vec<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Merge {
            target,
            sources,
            report,
            compact,
            output,
            config,
            verbose,
        } => {
            let opts = MergeOptions {
                report,
                compact,
                output,
                verbose,
            };
            if let Err(e) = run_merge(&target, &sources, config, opts) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Commands::Inspect { filenames, json } => {
            run_inspect(&filenames, json);
        }
    }
}

struct MergeOptions {
    report: bool,
    compact: bool,
    output: Option<PathBuf>,
    verbose: bool,
}

fn run_merge(
    target: &Path,
    sources: &[PathBuf],
    config_path: Option<PathBuf>,
    opts: MergeOptions,
) -> Result<(), String> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(nullfill::config::DEFAULT_CONFIG_FILE));
    let config = ToolConfig::load(Some(&config_path)).map_err(|e| e.to_string())?;
    if opts.verbose {
        match &config.path {
            Some(p) => eprintln!("Using config: {}", p.display()),
            None => eprintln!("Using built-in config"),
        }
    }

    let target_doc = load_verbose(target, opts.verbose)?;
    let source_docs = sources
        .iter()
        .map(|p| load_verbose(p, opts.verbose))
        .collect::<Result<Vec<_>, _>>()?;

    let report = MergeReport::build(target_doc, source_docs);
    if opts.verbose {
        eprintln!("Filled {} path(s)", report.filled.len());
    }

    let pretty = config.pretty() && !opts.compact;
    let rendered = if opts.report || config.report() {
        render(&report, pretty)
    } else {
        render(&report.result, pretty)
    };
    let rendered = rendered.map_err(|e| format!("serializing output: {}", e))?;

    match opts.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", rendered))
                .map_err(|e| format!("writing {}: {}", path.display(), e))?;
            if opts.verbose {
                eprintln!("Wrote: {}", path.display());
            }
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn load_verbose(path: &Path, verbose: bool) -> Result<Document, String> {
    let doc = Document::load(path).map_err(|e| e.to_string())?;
    if verbose {
        eprintln!(
            "Loaded {} ({}, sha256 {})",
            doc.path.display(),
            doc.format,
            doc.digest
        );
    }
    Ok(doc)
}

fn render<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn run_inspect(filenames: &[String], json: bool) {
    let infos: Vec<FileInfo> = filenames.iter().map(|f| FileInfo::inspect(f)).collect();

    if json {
        match serde_json::to_string_pretty(&infos) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    for info in &infos {
        let ext = if info.extension.is_empty() {
            "-"
        } else {
            info.extension.as_str()
        };
        println!(
            "{}\text={}\tkind={}\timage={}\tpdf={}",
            info.name,
            ext,
            info.kind,
            info.is_image(),
            info.is_pdf()
        );
    }
}
