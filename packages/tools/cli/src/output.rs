//! 출력 형식

use ddk_sql::DdlGenerator;
use serde::{Deserialize, Serialize};

/// 출력 형식
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 문장 목록 출력 (text: 한 줄에 하나, `;` 종결)
pub fn print_statements(format: OutputFormat, statements: &[String]) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", DdlGenerator::to_script(statements)),
        OutputFormat::Json => print_json(&statements)?,
    }
    Ok(())
}

/// 단일 문장 출력
pub fn print_statement(format: OutputFormat, statement: String) -> anyhow::Result<()> {
    print_statements(format, &[statement])
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
