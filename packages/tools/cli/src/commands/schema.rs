//! Schema 관련 명령어

use ddk_core::schema::{Database, TypeMap};
use ddk_sql::{DatabaseDdl, DdlGenerator};

use crate::output::{self, OutputFormat};

/// 테이블 생성 보장 (이름이 없으면 전체)
pub fn ensure(db: &Database, format: OutputFormat, tables: &[String]) -> anyhow::Result<()> {
    let statements = if tables.is_empty() {
        db.ensure_all()?
    } else {
        let names: Vec<&str> = tables.iter().map(String::as_str).collect();
        db.ensure_tables(&names)?
    };

    tracing::info!(count = statements.len(), "generated ensure statements");
    output::print_statements(format, &statements)
}

/// DB 생성부터 모든 테이블까지의 스크립트
pub fn bootstrap(db: &Database, format: OutputFormat) -> anyhow::Result<()> {
    let statements = DdlGenerator::bootstrap(db)?;
    output::print_statements(format, &statements)
}

/// 테이블 행 형태 출력
pub fn row_shape(db: &Database, format: OutputFormat, name: &str) -> anyhow::Result<()> {
    let table = db.require_table(name)?;
    let fields = table.row_shape(&TypeMap::mysql());

    match format {
        OutputFormat::Json => output::print_json(&fields)?,
        OutputFormat::Text => {
            println!("{}", table.aliased_name());
            for field in fields {
                let marker = if field.optional { "?" } else { "" };
                println!("  {}{}: {:?}", field.name, marker, field.value_type);
            }
        }
    }

    Ok(())
}
