use clap::{Parser, ValueEnum};
use sentence_gen::{GeneratorConfig, OutputFormat, describe_grammar, driver};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing_subscriber::EnvFilter;

const PAUSE_PROMPT: &str = "Press Enter to exit...";

/// Random sentence generator for a fixed context-free grammar
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of sentences to generate
    #[arg(short = 'n', long, default_value_t = 5)]
    count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Exit without waiting for Enter (by default a terminal run ends with
    /// "Press Enter to exit...")
    #[arg(long)]
    no_pause: bool,

    /// Print the grammar and exit
    #[arg(long)]
    show_grammar: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            count: self.count,
            seed: self.seed,
            format: self.format.into(),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    if cli.show_grammar {
        println!("{}", describe_grammar());
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver::run(&cli.config(), &mut out)?;
    out.flush()?;

    // Hold the window open until acknowledged
    let stdin = io::stdin();
    if !cli.no_pause && stdin.is_terminal() {
        eprint!("{}", PAUSE_PROMPT);
        io::stderr().flush()?;
        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
    }

    Ok(())
}
