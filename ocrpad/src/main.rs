use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ocrpad::capabilities::{DiskDownloader, PathPicker, SystemClipboard};
use ocrpad::config::Config;
use ocrpad::models::{Language, SessionStatus};
use ocrpad::ocr::OcrClient;
use ocrpad::session::UploadSession;

#[derive(Parser)]
#[command(name = "ocrpad")]
#[command(about = "Extract text from an image with a remote OCR service")]
struct Args {
    /// Image to recognize (JPG, PNG, BMP, ...)
    image: PathBuf,

    /// Recognition language: eng or amh
    #[arg(short, long)]
    lang: Option<Language>,

    /// OCR service base URL (overrides OCRPAD_API_BASE)
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds (overrides OCRPAD_TIMEOUT)
    #[arg(long)]
    timeout: Option<u64>,

    /// Copy the extracted text to the clipboard
    #[arg(long)]
    copy: bool,

    /// Save the extracted text to this file or directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the final session state as JSON instead of the plain text
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ocrpad=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env();
    if let Some(endpoint) = args.endpoint {
        config.ocr.base_url = endpoint;
    }
    if let Some(timeout) = args.timeout {
        config.ocr.timeout_secs = timeout;
    }

    let client = OcrClient::new(&config.ocr)?;
    tracing::info!("Using OCR endpoint {}", client.endpoint());

    let output_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut session = UploadSession::new(
        Box::new(client),
        Box::new(SystemClipboard),
        Box::new(DiskDownloader::new(output_dir)),
        Box::new(PathPicker::new(&args.image)),
    )
    .with_language(args.lang.unwrap_or(config.session.default_language));

    if !session.pick_file()? {
        anyhow::bail!("{} is not an image", args.image.display());
    }

    session.submit().await;

    if session.status() == SessionStatus::Error {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        } else if let Some(message) = session.error_message() {
            eprintln!("{message}");
        }
        return Ok(ExitCode::FAILURE);
    }

    if args.copy {
        session.copy_result();
        if session.copy_feedback_active() {
            eprintln!("Copied!");
        } else if let Some(message) = session.error_message() {
            eprintln!("{message}");
        }
    }

    if args.output.is_some() {
        match session.save_result()? {
            Some(path) => eprintln!("Saved to {}", path.display()),
            None => eprintln!("No text extracted, nothing saved"),
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        println!("{}", session.recognized_text());
    }

    Ok(ExitCode::SUCCESS)
}
