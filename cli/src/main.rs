//! doctoc CLI - document outline extraction tool
//!
//! Scans an input directory for page-dump JSON files and writes one outline
//! JSON record per document to a mirrored location in the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use doctoc::{extract_file, render, JsonFormat};

#[derive(Parser)]
#[command(name = "doctoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract document outlines from positioned-text page dumps", long_about = None)]
struct Cli {
    /// Directory containing page-dump JSON files
    #[arg(value_name = "INPUT_DIR")]
    input: PathBuf,

    /// Directory to write outline JSON files
    #[arg(value_name = "OUTPUT_DIR")]
    output: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli.input, &cli.output) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(input_dir: &Path, output_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let files = scan_input_dir(input_dir)?;
    if files.is_empty() {
        println!(
            "{} no .json files found in {}",
            "Warning:".yellow(),
            input_dir.display()
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // Each document owns its own pipeline state, so files fan out freely.
    let failed: usize = files
        .par_iter()
        .map(|path| {
            let result = process_document(path, output_dir);
            pb.inc(1);
            match result {
                Ok(()) => 0,
                Err(e) => {
                    pb.suspend(|| {
                        eprintln!(
                            "{} {}: {}",
                            "Failed".red().bold(),
                            path.display(),
                            e
                        );
                    });
                    1
                }
            }
        })
        .sum();

    pb.finish_and_clear();

    let processed = files.len() - failed;
    println!(
        "{} {} document{} processed, {} failed",
        "Done:".green().bold(),
        processed,
        if processed == 1 { "" } else { "s" },
        failed
    );

    Ok(())
}

/// Collect `.json` files from the input directory (non-recursive).
fn scan_input_dir(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("json"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Extract one document's outline and write it to the mirrored output path.
fn process_document(input: &Path, output_dir: &Path) -> doctoc::Result<()> {
    log::info!("processing {}", input.display());

    let outline = extract_file(input)?;
    let json = render::to_json(&outline, JsonFormat::Pretty)?;

    let file_name = input.file_name().unwrap_or_default();
    fs::write(output_dir.join(file_name), json)?;
    Ok(())
}
