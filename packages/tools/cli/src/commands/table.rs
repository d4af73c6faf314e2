//! Table 명령어

use ddk_core::schema::Database;
use ddk_sql::TableDdl;

use crate::output::{self, OutputFormat};

pub fn create(
    db: &Database,
    format: OutputFormat,
    name: &str,
    if_not_exists: bool,
) -> anyhow::Result<()> {
    let table = db.require_table(name)?;
    output::print_statement(format, table.create(if_not_exists)?)
}

pub fn drop(db: &Database, format: OutputFormat, name: &str, if_exists: bool) -> anyhow::Result<()> {
    let table = db.require_table(name)?;
    output::print_statement(format, TableDdl::drop(table, if_exists).render()?)
}
