use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use pow10_table::{
    emit::{self, EmitOptions},
    PowerTable, TableConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Rust,
    Json,
}

/// Generate a table of correctly rounded binary approximations of powers of ten
#[derive(Parser, Debug)]
#[command(name = "pow10-table", version)]
struct Args {
    /// JSON file with table parameters, flags below override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Smallest decimal exponent
    #[arg(long, allow_hyphen_values = true)]
    min_exp: Option<i32>,

    /// Largest decimal exponent
    #[arg(long, allow_hyphen_values = true)]
    max_exp: Option<i32>,

    /// Significand width in bits
    #[arg(short, long)]
    bits: Option<u32>,

    /// Decimal mantissa of every entry
    #[arg(short, long)]
    mantissa: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = Format::Rust)]
    format: Format,

    /// File whose contents are placed above the generated Rust table
    #[arg(long, value_name = "FILE")]
    header: Option<PathBuf>,

    /// Write the table here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn table_config(&self) -> Result<TableConfig> {
        let mut config = match &self.config {
            Some(path) => TableConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => TableConfig::default(),
        };

        if let Some(min_exp) = self.min_exp {
            config.min_exp = min_exp;
        }
        if let Some(max_exp) = self.max_exp {
            config.max_exp = max_exp;
        }
        if let Some(bits) = self.bits {
            config.bits = bits;
        }
        if let Some(mantissa) = self.mantissa {
            config.mantissa = mantissa;
        }

        Ok(config)
    }

    fn emit_options(&self) -> Result<EmitOptions> {
        let Some(path) = &self.header else {
            return Ok(EmitOptions::default());
        };
        if self.format != Format::Rust {
            bail!("--header only applies to Rust output");
        }

        let header = fs::read_to_string(path)
            .with_context(|| format!("failed to read header {}", path.display()))?;
        Ok(EmitOptions {
            header: Some(header),
        })
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.table_config()?;
    let options = args.emit_options()?;
    let table = PowerTable::generate(&config).context("power table generation failed")?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match args.format {
        Format::Rust => emit::write_rust(&table, &options, &mut out)?,
        Format::Json => emit::write_json(&table, &mut out)?,
    }
    out.flush()?;

    if let Some(path) = &args.output {
        tracing::info!(path = %path.display(), entries = table.len(), "table written");
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}
