//! Database 명령어

use ddk_core::schema::Database;
use ddk_sql::DatabaseDdl;

use crate::output::{self, OutputFormat};

pub fn create(db: &Database, format: OutputFormat, if_not_exists: bool) -> anyhow::Result<()> {
    output::print_statement(format, db.create(if_not_exists)?)
}

pub fn use_db(db: &Database, format: OutputFormat) -> anyhow::Result<()> {
    output::print_statement(format, db.use_db()?)
}

pub fn drop(db: &Database, format: OutputFormat, if_exists: bool) -> anyhow::Result<()> {
    output::print_statement(format, DatabaseDdl::drop(db, if_exists)?)
}
