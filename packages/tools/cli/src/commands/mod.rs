//! CLI 명령어 구현

pub mod config;
pub mod database;
pub mod query;
pub mod schema;
pub mod table;

use std::path::Path;

use anyhow::Context as _;
use ddk_core::schema::{Database, SchemaParser};

/// 스키마 파일 로드
pub fn load_schema(path: &Path) -> anyhow::Result<Database> {
    SchemaParser::parse_file(path)
        .with_context(|| format!("failed to load schema from {}", path.display()))
}
