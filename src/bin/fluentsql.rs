//! fluentsql: inspect queries from the command line
//!
//! # Usage
//!
//! ```bash
//! # Compile a serialized query
//! fluentsql compile query.json --dialect sqlserver
//!
//! # Show column expansion
//! fluentsql expand 'users.{id, name as n}'
//!
//! # Show a window ORDER BY fragment
//! fluentsql order-by Id:DESC Name
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use fluentsql::prelude::*;

#[derive(Parser)]
#[command(name = "fluentsql")]
#[command(version)]
#[command(about = "Compile fluent query documents to SQL", long_about = None)]
struct Cli {
    /// Verbose logging (overrides RUST_LOG for this crate)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a JSON-serialized query
    Compile {
        /// Path to the query document
        file: PathBuf,

        /// SQL dialect (postgres, sqlserver, mysql, sqlite)
        #[arg(short, long, env = "FLUENTSQL_DIALECT")]
        dialect: Option<String>,

        /// Config file (defaults to fluentsql.toml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Expand column expressions
    Expand {
        expressions: Vec<String>,
    },
    /// Build a window ORDER BY fragment from `column[:direction]` terms
    OrderBy {
        terms: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Compile {
            file,
            dialect,
            config,
            format,
        } => compile(file, dialect.as_deref(), config.as_deref(), format),
        Commands::Expand { expressions } => {
            expand(expressions);
            Ok(())
        }
        Commands::OrderBy { terms } => {
            order_by(terms);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("fluentsql=debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn compile(
    file: &std::path::Path,
    dialect: Option<&str>,
    config_path: Option<&std::path::Path>,
    format: &OutputFormat,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    };
    if let Some(d) = dialect {
        config.compiler.dialect = d.parse::<Dialect>().map_err(anyhow::Error::msg)?;
    }

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let query: Query = serde_json::from_str(&content).map_err(QueryError::from)?;

    let compiled = Compiler::from_config(&config.compiler).compile(&query);

    match format {
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "dialect": config.compiler.dialect,
                "sql": compiled.sql,
                "bindings": compiled.bindings,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Text => {
            println!(
                "{} {}",
                "Generated SQL".green().bold(),
                format!("({})", config.compiler.dialect).dimmed()
            );
            println!("{}", compiled.sql.white());

            if !compiled.bindings.is_empty() {
                println!();
                println!("{}", "Bindings:".cyan());
                for (i, b) in compiled.bindings.iter().enumerate() {
                    println!("  {} = {}", (i + 1).to_string().dimmed(), b.to_string().yellow());
                }
            }
        }
    }

    Ok(())
}

fn expand(expressions: &[String]) {
    for expr in expressions {
        println!("{}", expr.yellow());
        for column in expand_expression(expr) {
            println!("  {} {}", "→".dimmed(), column);
        }
    }
}

fn order_by(terms: &[String]) {
    let terms: Vec<OrderTerm> = terms
        .iter()
        .map(|t| match t.split_once(':') {
            Some((column, direction)) => OrderTerm::new(column, direction),
            None => OrderTerm::asc(t.as_str()),
        })
        .collect();

    let fragment = build_order_by(&terms);
    if fragment.trim().is_empty() {
        println!("{}", "(no ORDER BY)".dimmed());
    } else {
        println!("{} {}", "ORDER BY".cyan(), fragment);
    }
}
