//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{info, warn};

use chatstat::ChatstatError;
use chatstat::cli::Args;
use chatstat::core::{analyze, user_list};
use chatstat::format::{OutputFormat, to_format_string, write_to_format};
use chatstat::links::UrlExtractor;
use chatstat::logging::init_logging;
use chatstat::parser::ChatParser;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatstatError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    let config = args.analysis_config()?;
    let parser = ChatParser::with_config(config.parser.clone());

    let parse_start = Instant::now();
    let records = parser.parse(&args.input)?;
    info!(
        records = records.len(),
        elapsed_ms = parse_start.elapsed().as_millis() as u64,
        input = %args.input.display(),
        "parsed export"
    );

    if args.list_users {
        for user in user_list(&records) {
            println!("{user}");
        }
        return Ok(());
    }

    let selection = args.selection();
    if !selection.is_overall() && !records.iter().any(|r| selection.matches(r)) {
        warn!(user = %selection, "no messages from this participant");
    }

    let analysis = analyze(&records, &selection, &UrlExtractor::new(), &config);
    let format: OutputFormat = args.format.into();

    match &args.output {
        Some(path) => {
            let written = write_to_format(&analysis, path, format)?;
            println!("📊 chatstat v{}", env!("CARGO_PKG_VERSION"));
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!("📂 Input:   {}", args.input.display());
            println!("👤 User:    {}", selection);
            println!("📄 Format:  {}", format);
            println!("   Parsed {} messages", records.len());
            println!();
            for file in &written {
                println!("💾 {}", file.display());
            }
            println!("✅ Done in {:.2}s", total_start.elapsed().as_secs_f64());
        }
        None => {
            let report = to_format_string(&analysis, format)?;
            print!("{report}");
            if !report.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
