use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pdftool::forms::field_mappings;
use pdftool::{FileSystemLoader, FormFieldService, FormFields};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pdftool",
    about = "Extract and classify PDF form fields",
    version,
    author
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON object keyed by fully-qualified name
    Json,
    /// Aligned plain-text table
    Table,
}

#[derive(Subcommand)]
enum Commands {
    /// List the form fields of a PDF
    Fields {
        /// Source identifier, resolved relative to --root
        source: String,

        /// Directory that source identifiers are resolved against
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the field name mapping table
    Mappings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "pdftool=debug" } else { "pdftool=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Fields {
            source,
            root,
            format,
            output,
        } => {
            debug!("Resolving {} against {}", source, root.display());
            let service = FormFieldService::new(FileSystemLoader::new(root));
            let fields = service
                .form_fields(&source)
                .with_context(|| format!("Failed to extract form fields from {source}"))?;

            let rendered = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&fields)?,
                OutputFormat::Table => render_table(&fields),
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered + "\n")
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {} fields to {}", fields.len(), path.display());
                }
                None => println!("{rendered}"),
            }
        }

        Commands::Mappings => {
            let width = field_mappings()
                .iter()
                .map(|m| m.form_field_name.len())
                .max()
                .unwrap_or(0);
            for mapping in field_mappings() {
                println!("{:<width$}  {}", mapping.form_field_name, mapping.api_name);
            }
        }
    }

    Ok(())
}

fn render_table(fields: &FormFields) -> String {
    let rows: Vec<[String; 4]> = fields
        .iter()
        .map(|(key, field)| {
            let value = match (&field.value, field.checked) {
                (Some(value), _) => value.clone(),
                (None, Some(checked)) => checked.to_string(),
                (None, None) => String::new(),
            };
            [key.clone(), field.name.clone(), field.field_type.to_string(), value]
        })
        .collect();

    let header = ["FIELD", "NAME", "TYPE", "VALUE"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 4]| {
        format!(
            "{:<w0$}  {:<w1$}  {:<w2$}  {}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        )
        .trim_end()
        .to_string()
    };

    let mut lines = vec![format_row(header)];
    for row in &rows {
        lines.push(format_row([&row[0], &row[1], &row[2], &row[3]]));
    }
    lines.push(format!("{} fields", rows.len()));
    lines.join("\n")
}
