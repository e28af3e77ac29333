use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use spendscan_ingest::detect;
use spendscan_ledger::{Analysis, Categorizer, analyze_lines};

mod config;

#[derive(Parser, Debug)]
#[command(name = "spendscan", version, about = "Bank statement expense analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze an extracted statement text file and print categorized expenses
    Analyze {
        /// Statement text, one logical line per physical line
        file: PathBuf,

        /// TOML category table overriding the built-in one
        #[arg(long)]
        categories: Option<PathBuf>,

        /// Emit one JSON document instead of text tables
        #[arg(long)]
        json: bool,
    },

    /// Report which statement layout a text file uses
    Detect {
        /// Statement text to probe
        file: PathBuf,
    },

    /// Print the active category table in matching order
    Categories {
        /// TOML category table overriding the built-in one
        #[arg(long)]
        categories: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            file,
            categories,
            json,
        } => {
            let lines = read_lines(&file)?;
            let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
            let table = config::load_category_table(categories.as_deref())?;
            let categorizer = Categorizer::new(table);
            let analysis = analyze_lines(&lines, &categorizer)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_analysis(&analysis);
            }
        }

        Command::Detect { file } => {
            let lines = read_lines(&file)?;
            let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
            let detection = detect(&lines);
            if detection.fallback {
                println!(
                    "no format marker found; defaulting to {}",
                    detection.format.label()
                );
            } else {
                println!("{}", detection.format.label());
            }
        }

        Command::Categories { categories } => {
            let table = config::load_category_table(categories.as_deref())?;
            for rule in table.rules() {
                if rule.keywords.is_empty() {
                    println!("{}", rule.name);
                } else {
                    println!("{}: {}", rule.name, rule.keywords.join(", "));
                }
            }
        }
    }

    Ok(())
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

fn print_analysis(analysis: &Analysis) {
    if analysis.fallback {
        eprintln!(
            "warning: no format marker found, defaulting to {}",
            analysis.format.label()
        );
    }
    println!("Format: {}", analysis.format.label());
    println!();

    println!(
        "{:<8} {:<32} {:>10}  {}",
        "Date", "Description", "Amount", "Category"
    );
    for row in &analysis.transactions {
        let date = row.date.format("%d %b").to_string();
        println!(
            "{:<8} {:<32} {:>10.2}  {}",
            date, row.description, row.amount, row.category
        );
    }

    println!();
    for entry in &analysis.summary.by_category {
        println!(
            "{:<20} {:>10.2}  ({} txn{})",
            entry.category,
            entry.total,
            entry.count,
            if entry.count == 1 { "" } else { "s" }
        );
    }
    println!("Total expenses: ${:.2}", analysis.summary.total);
}
