use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use ekman_splits::stages::DEFAULT_PREFIX;
use ekman_splits::{LoadConfig, RenderConfig, build_corpus, load_corpus};

#[derive(Parser)]
#[command(name = "ekman-splits")]
#[command(author, version, about = "Build Ekman-style 7-class CSV splits from per-utterance emotion annotations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map labels and write the combined and per-split CSV files
    Build {
        /// Raw text directory containing 'train', 'val' and 'test'
        #[arg(long)]
        raw_text_root: PathBuf,

        /// Output directory for CSV files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Output file name prefix
        #[arg(long, default_value = DEFAULT_PREFIX)]
        prefix: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report label and split counts without writing any files
    Analyze {
        /// Raw text directory containing 'train', 'val' and 'test'
        #[arg(long)]
        raw_text_root: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            raw_text_root,
            out_dir,
            prefix,
            verbose,
        } => {
            setup_logging(verbose);
            build(raw_text_root, out_dir, prefix)
        }
        Commands::Analyze {
            raw_text_root,
            verbose,
        } => {
            setup_logging(verbose);
            analyze(raw_text_root)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn build(raw_text_root: PathBuf, out_dir: PathBuf, prefix: String) -> Result<()> {
    info!("Building splits from {:?}", raw_text_root);
    let render_config = RenderConfig { out_dir, prefix };

    let (corpus, rendered) = build_corpus(&raw_text_root, &LoadConfig::default(), &render_config)
        .context("Failed to build emotion splits")?;

    info!(
        "Complete: {} utterances written to {:?}",
        corpus.summary.total, rendered.all.path
    );
    for (split, file) in &rendered.splits {
        info!("{}: {} rows", split, file.rows);
    }

    Ok(())
}

fn analyze(raw_text_root: PathBuf) -> Result<()> {
    info!("Analyzing annotations in {:?}", raw_text_root);
    let corpus = load_corpus(&raw_text_root, &LoadConfig::default())
        .context("Failed to load annotations")?;

    println!("Corpus Analysis");
    println!("===============");
    print!("{}", corpus.summary.format());
    println!();

    println!("Loading");
    println!("-------");
    for stats in &corpus.split_stats {
        println!(
            "{:<6} {} files, {} kept, {} invalid ids, {} unmapped labels",
            stats.split,
            stats.files_seen,
            stats.kept,
            stats.skipped_invalid_id,
            stats.skipped_unmapped
        );
    }

    Ok(())
}
