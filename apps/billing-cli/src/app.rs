//! Command handling.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, warn};

use billing_core::validation::line_item_issues;
use billing_core::{
    compute_document_totals, format_currency, DocumentTotals, PrintSummary, TaxCatalog,
};

use crate::config::BillingConfig;
use crate::input::DocumentInput;

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    pub document: Option<PathBuf>,
    pub show_catalog: bool,
    pub json: bool,
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments (without the program name).
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--document" | "-d" => {
                    let path = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("{} needs a file path", arg))?;
                    parsed.document = Some(PathBuf::from(path));
                }
                "--catalog" | "-c" => parsed.show_catalog = true,
                "--json" => parsed.json = true,
                "--help" | "-h" => parsed.help = true,
                other if !other.starts_with('-') && parsed.document.is_none() => {
                    parsed.document = Some(PathBuf::from(other));
                }
                other => anyhow::bail!("unknown argument: {}", other),
            }
        }

        Ok(parsed)
    }
}

pub const USAGE: &str = "\
ERP Billing - document totals

Usage: billing [OPTIONS] [DOCUMENT]

Options:
  -d, --document <PATH>  Document JSON to total
  -c, --catalog          Print the tax catalog
      --json             Print the result as JSON
  -h, --help             Show this help message

Environment:
  BILLING_LOCALE       en-IN (default) or en-US
  BILLING_CURRENCY     ISO code for display (default INR)
  BILLING_WORDS_LABEL  Prefix of the amount in words (default \"Indian Rupee\")
  BILLING_TAX_CATALOG  JSON file with tax options
  BILLING_LOG          tracing filter (default info)";

/// JSON output of a totalled document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    totals: DocumentTotals,
    balance_due: f64,
    formatted_total: String,
    summary: &'a PrintSummary,
}

/// Loads the configured tax catalog, or the built-in Indian one.
pub fn load_catalog(config: &BillingConfig) -> anyhow::Result<TaxCatalog> {
    match &config.tax_catalog_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
            let catalog = TaxCatalog::from_json(&json)?;
            info!(path = %path.display(), options = catalog.options().len(), "Tax catalog loaded");
            Ok(catalog)
        }
        None => Ok(TaxCatalog::indian()),
    }
}

/// Renders the catalog, one option per line.
pub fn render_catalog(catalog: &TaxCatalog, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(catalog)?);
    }

    let lines: Vec<String> = catalog
        .options()
        .iter()
        .map(|o| format!("{:<12} {}", o.label, o.rate))
        .collect();
    Ok(lines.join("\n"))
}

/// Totals a document and renders the output.
pub fn render_document(
    input: &DocumentInput,
    catalog: &TaxCatalog,
    config: &BillingConfig,
    json: bool,
) -> anyhow::Result<String> {
    for (index, item) in input.items.as_slice().iter().enumerate() {
        for issue in line_item_issues(item) {
            warn!(line = index + 1, %issue, "Suspicious line input");
        }
    }

    if let Some(tax) = input.charges.tax.filter(|t| t.is_selected()) {
        if catalog.find(tax.category, tax.rate).is_none() {
            warn!(category = ?tax.category, rate = tax.rate, "Tax rate not in catalog");
        }
        if !input.kind.has_tax_section() {
            debug!(kind = ?input.kind, "Document has no tax section, tax ignored");
        }
    }

    let totals = compute_document_totals(input.kind, input.items.as_slice(), &input.charges);
    let summary = PrintSummary::build(input.kind, &totals, &input.charges, &config.words_label);
    let balance_due = totals.balance_due(input.amount_paid);
    let formatted_total = format_currency(totals.total, config.locale, &config.currency_code);

    info!(
        kind = ?input.kind,
        lines = input.items.len(),
        sub_total = totals.sub_total,
        total = totals.total,
        "Document totalled"
    );

    if json {
        let report = Report {
            totals,
            balance_due,
            formatted_total,
            summary: &summary,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = summary.to_string();
    out.push_str(&format!("\n\nTotal ({}): {}", config.locale, formatted_total));
    if input.amount_paid != 0.0 {
        out.push_str(&format!(
            "\nBalance Due: {}",
            format_currency(balance_due, config.locale, &config.currency_code)
        ));
    }
    Ok(out)
}
