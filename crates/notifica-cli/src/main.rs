//! CLI shell for the voucher notification generator.
//!
//! Reads voucher text from a file or stdin, runs extraction and rendering,
//! prints the notification document, and optionally copies it to the system
//! clipboard.

mod clipboard;

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use notifica_core::{NotificationRenderer, RuleBasedParser, VoucherParser};

/// Generate a condominium payment notification from bank voucher text
#[derive(Parser)]
#[command(name = "notifica")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Voucher text file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Copy the generated notification to the clipboard
    #[arg(long)]
    copy: bool,

    /// Print the extracted fields as JSON before the notification
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let text = read_input(cli.input.as_deref())?;
    if text.trim().is_empty() {
        eprintln!("Por favor, ingrese el texto del comprobante bancario.");
        return Ok(());
    }

    let data = RuleBasedParser::new().parse(&text);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    }

    let notification = NotificationRenderer::new().render(&data);
    println!("{notification}");

    // A clipboard failure never discards the document already printed above
    if cli.copy {
        match clipboard::copy(&notification) {
            Ok(()) => eprintln!("Notificación copiada al portapapeles."),
            Err(err) => {
                eprintln!("No se pudo copiar al portapapeles: {err:#}");
                eprintln!(
                    "En Linux puede requerirse 'xclip' o 'xsel', o una sesión gráfica activa."
                );
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
