//! Airtable OpenAPI generator CLI
//!
//! Command-line interface for generating OpenAPI documents from Airtable
//! base schemas. Documents go to stdout (or a file); status lines go to
//! stderr so they never end up in piped JSON.

use airtable_oas_common::BaseDefinition;
use airtable_oas_generator::{GeneratorOptions, OpenApiGenerator, UpdateMethod};
use airtable_oas_parser::{remove_foreign_tables, AirtableParser};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "airtable-oas")]
#[command(
    version,
    about = "Generate OpenAPI 3.0 documents from Airtable base schemas",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an Airtable schema file into an OpenAPI document
    #[command(after_help = "EXAMPLES:\n  \
        # Print the OpenAPI document\n  \
        airtable-oas convert --schema base-schema.json\n\n  \
        # Write it to a file, using PUT for updates\n  \
        airtable-oas convert --schema base-schema.json \\\n    \
        --update-method put \\\n    \
        --output openapi.json\n\n  \
        # Export the raw Airtable schema without embedded foreign tables\n  \
        airtable-oas convert --schema base-schema.json --format airtable")]
    Convert {
        /// Path to the Airtable schema JSON file
        #[arg(short, long)]
        schema: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "oas3")]
        format: OutputFormat,

        /// HTTP method of the update operation
        #[arg(long, value_enum, default_value = "patch")]
        update_method: UpdateMethodArg,

        /// Emit compact JSON instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,
    },

    /// Parse an Airtable schema file and display its tables
    Inspect {
        /// Path to the Airtable schema JSON file
        #[arg(short, long)]
        schema: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// OpenAPI 3.0 document
    Oas3,
    /// Raw Airtable schema with foreign tables removed
    Airtable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UpdateMethodArg {
    Patch,
    Put,
}

impl From<UpdateMethodArg> for UpdateMethod {
    fn from(arg: UpdateMethodArg) -> Self {
        match arg {
            UpdateMethodArg::Patch => UpdateMethod::Patch,
            UpdateMethodArg::Put => UpdateMethod::Put,
        }
    }
}

/// Options of the convert command
struct ConvertConfig<'a> {
    schema_path: &'a Path,
    output: Option<&'a Path>,
    format: OutputFormat,
    update_method: UpdateMethod,
    pretty: bool,
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        eprintln!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Commands::Convert {
            schema,
            output,
            format,
            update_method,
            compact,
        } => {
            convert_command(ConvertConfig {
                schema_path: schema.as_path(),
                output: output.as_deref(),
                format,
                update_method: update_method.into(),
                pretty: !compact,
                verbose: cli.verbose,
            })?;
        }
        Commands::Inspect { schema } => {
            inspect_command(schema.as_path(), cli.verbose)?;
        }
    }

    Ok(())
}

fn convert_command(config: ConvertConfig) -> Result<()> {
    eprintln!(
        "{} Reading Airtable schema: {}",
        "→".cyan(),
        config.schema_path.display()
    );
    let raw = read_schema_value(config.schema_path)?;

    match config.format {
        OutputFormat::Airtable => {
            eprintln!("{} Removing embedded foreign tables", "→".cyan());
            let stripped = remove_foreign_tables(&raw);
            let json = if config.pretty {
                serde_json::to_string_pretty(&stripped)?
            } else {
                serde_json::to_string(&stripped)?
            };
            write_output(&json, config.output)?;
        }
        OutputFormat::Oas3 => {
            let base_def = AirtableParser::from_value(raw)
                .context("Failed to load Airtable schema")?
                .parse()
                .context("Failed to convert Airtable schema")?;

            eprintln!(
                "{} Resolved {} tables",
                "✓".green(),
                base_def.tables.len()
            );
            if config.verbose {
                eprintln!("  Base: {} ({})", base_def.name, base_def.id);
                eprintln!("  Update method: {:?}", config.update_method);
            }

            let options = GeneratorOptions::default().with_update_method(config.update_method);
            let generator = OpenApiGenerator::new(base_def).with_options(options);

            match config.output {
                Some(path) => {
                    generator
                        .generate_to_file(path, config.pretty)
                        .context("Failed to generate OpenAPI document")?;
                    eprintln!("{} Wrote {}", "✓".green(), path.display());
                }
                None => {
                    let json = generator
                        .generate_json(config.pretty)
                        .context("Failed to generate OpenAPI document")?;
                    println!("{}", json);
                }
            }
        }
    }

    eprintln!("{}", "✓ Conversion complete!".green().bold());
    Ok(())
}

fn inspect_command(schema_path: &Path, verbose: bool) -> Result<()> {
    eprintln!(
        "{} Parsing Airtable schema: {}",
        "→".cyan(),
        schema_path.display()
    );

    let base_def = AirtableParser::from_value(read_schema_value(schema_path)?)
        .context("Failed to load Airtable schema")?
        .parse()
        .context("Failed to convert Airtable schema")?;

    println!("\n{}", "✓ Parse successful!".green().bold());
    print_base(&base_def, verbose)?;

    Ok(())
}

fn print_base(base_def: &BaseDefinition, verbose: bool) -> Result<()> {
    println!("\n{}", "Base:".bold());
    println!("  Name: {}", base_def.name.yellow());
    println!("  Id: {}", base_def.id.yellow());
    println!("  Tables: {}", base_def.tables.len());

    println!("\n{}", "Tables:".bold());
    for table in &base_def.tables {
        println!(
            "  • {} ({}) fields: {}, writable: {}",
            table.name.cyan(),
            table.identifier,
            table.fields.len(),
            table.writable_fields().count()
        );

        if verbose {
            for field in &table.fields {
                let schema = serde_json::to_string(&field.schema)?;
                let access = if field.read_only { " read-only" } else { "" };
                println!("    {}: {}{}", field.name, schema, access.dimmed());
            }
        }
    }

    Ok(())
}

fn read_schema_value(path: &Path) -> Result<serde_json::Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))
}

fn write_output(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory {}", parent.display())
                })?;
            }
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_convert_defaults() {
        let cli =
            Cli::try_parse_from(["airtable-oas", "convert", "--schema", "base.json"]).unwrap();
        match cli.command {
            Commands::Convert {
                schema,
                output,
                format,
                update_method,
                compact,
            } => {
                assert_eq!(schema, PathBuf::from("base.json"));
                assert!(output.is_none());
                assert_eq!(format, OutputFormat::Oas3);
                assert_eq!(update_method, UpdateMethodArg::Patch);
                assert!(!compact);
            }
            Commands::Inspect { .. } => panic!("expected convert command"),
        }
    }

    #[test]
    fn test_convert_flags() {
        let cli = Cli::try_parse_from([
            "airtable-oas",
            "-v",
            "convert",
            "-s",
            "base.json",
            "--format",
            "airtable",
            "--update-method",
            "put",
            "--compact",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Convert {
                format,
                update_method,
                compact,
                ..
            } => {
                assert_eq!(format, OutputFormat::Airtable);
                assert_eq!(UpdateMethod::from(update_method), UpdateMethod::Put);
                assert!(compact);
            }
            Commands::Inspect { .. } => panic!("expected convert command"),
        }
    }

    #[test]
    fn test_airtable_export_creates_output_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let schema_path = temp_dir.path().join("base.json");
        fs::write(
            &schema_path,
            r#"{"id": "appX", "name": "X", "tables": [
                {"name": "Tasks", "fields": [
                    {"name": "Owner", "type": "foreignKey", "foreignTable": {"name": "People"}}
                ]}
            ]}"#,
        )
        .unwrap();
        let output_path = temp_dir.path().join("exports").join("airtable.json");

        convert_command(ConvertConfig {
            schema_path: &schema_path,
            output: Some(output_path.as_path()),
            format: OutputFormat::Airtable,
            update_method: UpdateMethod::Patch,
            pretty: true,
            verbose: false,
        })
        .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
        assert_eq!(written["tables"][0]["fields"][0]["name"], "Owner");
        assert!(written["tables"][0]["fields"][0].get("foreignTable").is_none());
    }
}
