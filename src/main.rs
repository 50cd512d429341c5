use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use quiz_clock::Quiz;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal multiple-choice quiz with a live clock", long_about = None)]
struct Args {
    /// JSON file to load the questions from (built-in bank when omitted)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Start the clock in 24-hour mode
    #[arg(long = "24h")]
    use_24h: bool,

    /// Write logs to this file; logging is off otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// The terminal is owned by the UI, so logs only go to a file.
fn init_logging(args: &Args) -> std::io::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Failed to open log file: {}", e);
        std::process::exit(1);
    }

    let quiz = match &args.questions {
        Some(path) => Quiz::from_json(path, args.use_24h),
        None => Quiz::with_default_questions(args.use_24h),
    };

    let quiz = match quiz {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
