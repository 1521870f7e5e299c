//! CLI entry point for canopy

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use canopy::{Report, TreeWalker, WalkerConfig, print_json, render_tree};
use clap::{Parser, ValueEnum};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "A tree command that shows per-file and aggregated directory sizes")]
#[command(version)]
struct Args {
    /// Directory or file to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Keep raw directory-listing order instead of sorting by name
    #[arg(short = 'U', long = "unsorted")]
    unsorted: bool,

    /// Output the tree model in JSON format
    #[arg(long = "json", conflicts_with = "no_report")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Skip the trailing directory/file/byte summary
    #[arg(long = "no-report")]
    no_report: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("canopy: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = WalkerConfig {
        ignore_patterns: args.ignore.clone(),
        sort: !args.unsorted,
    };

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let entry = TreeWalker::new(config)
        .walk(&root)
        .with_context(|| format!("cannot read '{}'", args.path.display()))?;

    let Some(entry) = entry else {
        eprintln!(
            "canopy: cannot access '{}': No such file or directory",
            args.path.display()
        );
        process::exit(1);
    };

    if args.json {
        print_json(&entry).context("error writing output")?;
        return Ok(());
    }

    println!("{}", render_tree(&entry));

    if !args.no_report {
        Report::from_entry(&entry)
            .print(should_use_color(args.color))
            .context("error writing output")?;
    }

    Ok(())
}
