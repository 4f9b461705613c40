use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use zconv::{ConvertOptions, FileInfo, Value, XmlConfig};

#[derive(Debug, Parser)]
#[command(
    name = "zconv",
    version,
    about = "Convert documents between JSON, YAML and XML"
)]
struct Args {
    /// Input file; its extension selects the input format
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Output file
    #[arg(value_name = "OUTPUT", required_unless_present = "info")]
    output: Option<PathBuf>,
    /// Output format (json, yaml, xml); inferred from OUTPUT when omitted
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,
    /// Name of the synthetic XML root element
    #[arg(long, value_name = "NAME")]
    root: Option<String>,
    /// Read XML `true`/`false` and numbers as typed scalars
    #[arg(long)]
    typed: bool,
    /// Read XML elements holding only `item` children as sequences
    #[arg(long)]
    item_lists: bool,
    /// Print a summary of INPUT instead of converting
    #[arg(long, conflicts_with = "format")]
    info: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Json,
    #[value(alias = "yml")]
    Yaml,
    Xml,
}

impl From<FormatArg> for zconv::Format {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => zconv::Format::Json,
            FormatArg::Yaml => zconv::Format::Yaml,
            FormatArg::Xml => zconv::Format::Xml,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let options = ConvertOptions::with_xml(xml_config(&args));

    if args.info {
        let info = zconv::inspect_with_options(&args.input, &options)?;
        print_info(&args.input, &info);
        return Ok(());
    }

    let Some(output) = args.output.as_deref() else {
        bail!("an OUTPUT path is required");
    };
    let to = match args.format {
        Some(format) => format.into(),
        None => zconv::detect_format_from_path(output).with_context(|| {
            format!(
                "could not infer output format from {}; pass --format",
                output.display()
            )
        })?,
    };

    // nothing is created at the output path until the document is ready
    let from = zconv::Format::from_path(&args.input)?;
    let document = zconv::load(&args.input, from, &options)?;
    let text = zconv::to_string(&Value::Object(document), to, &options)
        .map_err(|err| err.in_document(output))?;
    ensure_parent_dir(output)?;
    zconv::fs::write_atomic(output, text.as_bytes())?;
    info!(
        "Converted {} ({from}) to {} ({to})",
        args.input.display(),
        output.display()
    );
    Ok(())
}

fn xml_config(args: &Args) -> XmlConfig {
    let config = XmlConfig::new()
        .with_typed_scalars(args.typed)
        .with_item_lists(args.item_lists);
    match &args.root {
        Some(root) => config.with_root_name(root.as_str()),
        None => config,
    }
}

fn ensure_parent_dir(output: &Path) -> Result<()> {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display())),
        _ => Ok(()),
    }
}

fn print_info(path: &Path, info: &FileInfo) {
    println!("file: {}", path.display());
    println!("format: {}", info.format);
    println!("size: {} bytes", info.size_bytes);
    println!("valid: {}", info.valid);
    if info.valid {
        println!("top-level keys: {}", info.top_level_keys);
        println!("nodes: {}", info.node_count);
    }
    if let Some(error) = &info.error {
        println!("error: {error}");
    }
}
