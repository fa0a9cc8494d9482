//! Process command - extract a record from a single voucher PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::debug;

use radon_core::sheet::COLUMNS;
use radon_core::voucher::{ExtractionResult, RecordParser, VoucherParser};
use radon_core::{InvoiceRecord, PdfSource, PdfTextExtractor, RadonConfig};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Append the extracted record to the record store
    #[arg(long)]
    save: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::config::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let data = fs::read(&args.input)?;
    let file_name = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("document.pdf")
        .to_string();

    let result = extract_from_bytes(&data, &file_name, &config)?;

    for warning in &result.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }

    if args.save {
        let store = super::store_handle(&config);
        store.append(vec![result.record.clone()])?;
        println!(
            "{} Record saved to {}",
            style("✓").green(),
            store.path().display()
        );
    }

    let output = format_record(&result.record, args.format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &output)?;
            println!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", output),
    }

    debug!("total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Extract one record from raw PDF bytes.
pub(crate) fn extract_from_bytes(
    data: &[u8],
    file_name: &str,
    config: &RadonConfig,
) -> anyhow::Result<ExtractionResult> {
    if !file_name.to_lowercase().ends_with(".pdf") {
        anyhow::bail!("Unsupported file format: {}", file_name);
    }

    let mut extractor = PdfTextExtractor::new();
    extractor.load(data)?;

    let text = extractor.extract_text()?;
    if text.trim().len() < config.pdf.min_text_length {
        anyhow::bail!("No usable text layer in {}", file_name);
    }

    let parser = VoucherParser::new().with_product_line(&config.extraction.product_line);
    let result = parser.parse(&text, file_name)?;

    Ok(result)
}

pub(crate) fn format_record(record: &InvoiceRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &InvoiceRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(COLUMNS)?;
    wtr.write_record([
        record.date.as_str(),
        record.sold_by.as_str(),
        record.client_name.as_str(),
        record.number.as_str(),
        record.source.as_str(),
        record.source_name.as_str(),
        record.product_line.as_str(),
        record.sale_type.as_str(),
        record.disc_offered.as_str(),
        record.voucher_type.as_str(),
        record.invoice_number.as_str(),
        &record.amount.to_string(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &InvoiceRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Voucher:  {}\n", record.voucher_type));
    output.push_str(&format!("Invoice:  {}\n", record.invoice_number));
    output.push_str(&format!("Date:     {}\n", record.date));
    if record.number.is_empty() {
        output.push_str(&format!("Client:   {}\n", record.client_name));
    } else {
        output.push_str(&format!(
            "Client:   {} ({})\n",
            record.client_name, record.number
        ));
    }
    output.push_str(&format!("Discount: {}\n", record.disc_offered));
    output.push_str(&format!("Amount:   {}\n", record.amount));
    output.push_str(&format!("File:     {}\n", record.file_name));

    output
}
