//! ddlkit CLI (`ddk`)
//!
//! 선언 스키마 파일에서 DDL/DML 문장을 생성해 출력하는 Operator 도구입니다.
//! 문장을 실행하지는 않습니다.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ddk_core::schema::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

use config::CliConfig;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "ddk")]
#[command(author, version, about = "ddlkit CLI - SQL statement generator for declared schemas", long_about = None)]
struct Cli {
    /// Schema file (overrides DDK_SCHEMA and config)
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    /// Output format (overrides config, default: text)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // ─────────────────────────────────────────────────────────────────────────
    // Config
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage CLI config
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // DDL
    // ─────────────────────────────────────────────────────────────────────────
    /// Database statements
    Database {
        #[command(subcommand)]
        action: DatabaseAction,
    },

    /// Table statements
    Table {
        #[command(subcommand)]
        action: TableAction,
    },

    /// CREATE TABLE IF NOT EXISTS for the given tables (all when omitted)
    Ensure {
        /// Table names
        tables: Vec<String>,
    },

    /// CREATE DATABASE, USE and every CREATE TABLE in declaration order
    Bootstrap,

    // ─────────────────────────────────────────────────────────────────────────
    // Inspect & Query
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the value types of a table's columns
    RowShape {
        /// Table name
        table: String,
    },

    /// Build a SELECT statement for a table
    Select {
        /// Table name
        table: String,

        /// Columns to select (comma-separated, default: *)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Conditions (inserted verbatim, joined with AND)
        #[arg(long = "where")]
        conditions: Vec<String>,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Subcommand enums
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum ConfigAction {
    /// Set config values
    Set {
        #[arg(long)]
        schema: Option<PathBuf>,
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Show current config
    Show,
}

#[derive(Subcommand)]
enum DatabaseAction {
    /// CREATE DATABASE
    Create {
        #[arg(long)]
        if_not_exists: bool,
    },
    /// USE
    Use,
    /// DROP
    Drop {
        #[arg(long)]
        if_exists: bool,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// CREATE TABLE
    Create {
        name: String,
        #[arg(long)]
        if_not_exists: bool,
    },
    /// DROP TABLE
    Drop {
        name: String,
        #[arg(long)]
        if_exists: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // 로깅 초기화 (stdout은 SQL 출력 전용)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ddk=info,ddk_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // config 명령은 설정/스키마 로드 없이 실행 (깨진 설정 파일 복구용)
    if let Commands::Config { action } = cli.command {
        return run_config(action);
    }

    let config = CliConfig::load()?;
    let format = config.output_format(cli.format);

    let schema_path = config.schema_path(cli.schema.as_deref())?;
    let db = commands::load_schema(&schema_path)?;
    tracing::debug!(schema = %schema_path.display(), database = db.name(), "schema loaded");

    run(cli.command, &db, format)
}

fn run_config(action: ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Set { schema, format } => commands::config::set(schema, format),
        ConfigAction::Show => commands::config::show(),
    }
}

/// 명령 실행
fn run(command: Commands, db: &Database, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        Commands::Config { action } => run_config(action),

        Commands::Database { action } => match action {
            DatabaseAction::Create { if_not_exists } => {
                commands::database::create(db, format, if_not_exists)
            }
            DatabaseAction::Use => commands::database::use_db(db, format),
            DatabaseAction::Drop { if_exists } => commands::database::drop(db, format, if_exists),
        },

        Commands::Table { action } => match action {
            TableAction::Create { name, if_not_exists } => {
                commands::table::create(db, format, &name, if_not_exists)
            }
            TableAction::Drop { name, if_exists } => {
                commands::table::drop(db, format, &name, if_exists)
            }
        },

        Commands::Ensure { tables } => commands::schema::ensure(db, format, &tables),
        Commands::Bootstrap => commands::schema::bootstrap(db, format),
        Commands::RowShape { table } => commands::schema::row_shape(db, format, &table),
        Commands::Select {
            table,
            columns,
            conditions,
        } => commands::query::select(db, format, &table, &columns, &conditions),
    }
}
