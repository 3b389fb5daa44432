//! Statement Reshape - CLI tool for flattening a bank-statement CSV export.

use clap::Parser;
use log::info;
use statement_reshaper::{
    csv_format::CsvStatement, LeadingGroup, OutputFormat, PipelineOptions, Result,
    TransactionTable,
};
use std::fs::File;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "statement_reshape")]
#[command(
    about = "Collapse multi-row bank statement transactions into one row each",
    long_about = None
)]
struct Cli {
    /// Input file path (or stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file path (or stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format (table, csv)
    #[arg(long, default_value = "table")]
    format: String,

    /// Number of records shown in table output (0 shows all)
    #[arg(long, default_value_t = 5)]
    head: usize,

    /// Rows before the first positive balance (keep, drop, merge)
    #[arg(long = "leading-group", default_value = "keep")]
    leading_group: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let format = cli.format.parse::<OutputFormat>()?;
    let options = PipelineOptions {
        leading_group: cli.leading_group.parse::<LeadingGroup>()?,
    };

    let statement = if let Some(ref input_path) = cli.input {
        let mut file = File::open(input_path)?;
        CsvStatement::from_read(&mut file)?
    } else {
        let mut stdin = io::stdin();
        CsvStatement::from_read(&mut stdin)?
    };

    let table = statement.reshape(&options);
    info!("{} rows reshaped into {} records", statement.rows().len(), table.len());

    if let Some(ref output_path) = cli.output {
        let mut file = File::create(output_path)?;
        write_output(&mut file, &table, format, cli.head)?;
    } else {
        let mut stdout = io::stdout();
        write_output(&mut stdout, &table, format, cli.head)?;
    }

    Ok(())
}

fn write_output<W: Write>(
    writer: &mut W,
    table: &TransactionTable,
    format: OutputFormat,
    head: usize,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let shown = if head == 0 { table.clone() } else { table.head(head) };
            write!(writer, "{}", shown)?;
            if shown.len() < table.len() {
                writeln!(writer, "... {} more records", table.len() - shown.len())?;
            }
        }
        OutputFormat::Csv => table.write_to(writer)?,
    }
    Ok(())
}
