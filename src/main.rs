use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use facturador::config::Config;
use facturador::core::currency::CURRENCY_SYMBOL;
use facturador::documents::export_pdf;
use facturador::invoices::models::InvoiceDraft;
use facturador::InvoiceForm;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Generate a PDF invoice from a JSON invoice draft
#[derive(Parser, Debug)]
#[command(name = "facturador", version, about)]
struct Cli {
    /// Invoice draft (JSON)
    draft: PathBuf,

    /// Output file; defaults to <output-dir>/Factura_<number>.pdf
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for the default output file (overrides INVOICE_OUTPUT_DIR)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Environment: {}", config.app.env);

    let json = fs::read_to_string(&cli.draft)
        .with_context(|| format!("Cannot read draft {}", cli.draft.display()))?;
    let draft = InvoiceDraft::from_json(&json)
        .with_context(|| format!("Invalid draft {}", cli.draft.display()))?;
    let form = InvoiceForm::from_draft(draft, config.invoice.new_form())
        .map_err(|err| anyhow::anyhow!(err.user_message()))
        .context("Invalid invoice line")?;

    let output = match cli.output {
        Some(path) => path,
        None => cli
            .output_dir
            .unwrap_or_else(|| config.invoice.output_dir.clone())
            .join(form.default_file_name()),
    };

    let totals = form.totals().formatted();
    let path = export_pdf(&form, &output)
        .map_err(|err| anyhow::anyhow!(err.user_message()))
        .context("Error al generar PDF")?;

    println!("Base imponible: {} {}", totals.base, CURRENCY_SYMBOL);
    println!("IVA {}: {} {}", totals.vat_rate, totals.vat, CURRENCY_SYMBOL);
    println!(
        "Retención {}: {} {}",
        totals.withholding_rate, totals.withholding, CURRENCY_SYMBOL
    );
    println!("Total factura: {} {}", totals.total, CURRENCY_SYMBOL);
    println!("Factura creada: {}", path.display());

    Ok(())
}
