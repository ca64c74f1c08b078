//! # billing
//!
//! Totals a sales document exported by the ERP front-end and prints the
//! summary block that goes on the PDF.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          billing CLI                                    │
//! │                                                                         │
//! │  document.json ───► DocumentInput ───► billing-core ───► stdout        │
//! │                                            ▲                            │
//! │  BILLING_* env ───► BillingConfig ─────────┘                            │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                   tracing (stderr)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod config;
mod input;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::{CliArgs, USAGE};
use crate::config::BillingConfig;
use crate::input::DocumentInput;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    // Load configuration
    let config = BillingConfig::load()?;

    // Initialize tracing; stdout is reserved for the document output
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        locale = %config.locale,
        currency = %config.currency_code,
        "Configuration loaded"
    );

    let catalog = app::load_catalog(&config)?;

    if args.show_catalog {
        println!("{}", app::render_catalog(&catalog, args.json)?);
        return Ok(());
    }

    let Some(path) = args.document.as_deref() else {
        eprintln!("{}", USAGE);
        anyhow::bail!("no document given");
    };

    let input = DocumentInput::from_file(path)?;
    println!("{}", app::render_document(&input, &catalog, &config, args.json)?);

    Ok(())
}
