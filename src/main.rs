use clap::Parser;

use wordfreq::analyze;
use wordfreq::config::Config;
use wordfreq::logging;
use wordfreq::report::{self, Format};

/// wordfreq — Report the most frequent words in a body of text.
///
/// Words are case-folded; punctuation and hyphenated words are ignored.
/// Defaults can also be set through TOP_N, OUTPUT_FORMAT and INPUT_FILE
/// (a .env file is read if present).
#[derive(Parser)]
#[command(name = "wordfreq")]
#[command(version = "0.1.0")]
#[command(about = "Report the N most frequent words in a text", long_about = None)]
struct Cli {
    /// Text file to analyze, or "-" for standard input
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Number of words to report
    #[arg(short = 'n', long = "top", value_name = "N")]
    top: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Log pipeline progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let source = cli.file.unwrap_or(config.input_file);
    let n = cli.top.unwrap_or(config.top_n);
    let format = cli.format.unwrap_or(config.format);

    let analysis = analyze::analyze_source(&source, n)?;
    let output = report::render(&analysis.top, analysis.totals, format)?;
    print!("{}", output);

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
