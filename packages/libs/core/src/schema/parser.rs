//! 스키마 YAML 파서
//!
//! 선언 스키마 파일을 파싱하여 [`Database`] 정의로 변환합니다.
//! 테이블과 컬럼은 목록 형태로 선언하므로 선언 순서가 그대로 DDL 순서가 됩니다.

use std::path::Path;

use serde::Deserialize;

use super::column::Column;
use super::database::Database;
use super::table::Table;
use crate::error::{Error, Result};

/// 스키마 파서
pub struct SchemaParser;

impl SchemaParser {
    /// 단일 YAML 문자열 파싱
    pub fn parse_yaml(yaml: &str) -> Result<Database> {
        let raw: RawSchema = serde_yaml::from_str(yaml)?;
        let database = Self::convert_raw_schema(raw)?;

        tracing::debug!(
            database = database.name(),
            tables = database.tables().len(),
            "parsed schema"
        );

        Ok(database)
    }

    /// 스키마 파일 파싱
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Database> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading schema file");

        let content = std::fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Raw 스키마를 Database로 변환
    fn convert_raw_schema(raw: RawSchema) -> Result<Database> {
        let tables = raw
            .tables
            .into_iter()
            .map(Self::convert_raw_table)
            .collect::<Result<Vec<_>>>()?;

        Database::new(raw.database, tables)
    }

    /// Raw 테이블을 Table로 변환
    fn convert_raw_table(raw: RawTable) -> Result<Table> {
        let columns = raw
            .columns
            .into_iter()
            .map(|c| Self::convert_raw_column(&raw.name, c))
            .collect::<Result<Vec<_>>>()?;

        Table::new(raw.name, columns, raw.key.unwrap_or_default(), raw.alias)
    }

    /// Raw 컬럼 변환
    fn convert_raw_column(table: &str, raw: RawColumn) -> Result<Column> {
        if let Some(text) = raw.raw {
            return Ok(Column {
                name: raw.name,
                sql_type: raw.column_type.unwrap_or_default(),
                nullable: raw.nullable.unwrap_or(true),
                default: raw.default,
                raw: Some(text),
            });
        }

        let sql_type = raw
            .column_type
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::SchemaValidation {
                message: format!(
                    "column `{}` in table `{}` requires 'type' or 'raw'",
                    raw.name, table
                ),
            })?;

        Ok(Column {
            name: raw.name,
            sql_type,
            nullable: raw.nullable.unwrap_or(true),
            default: raw.default,
            raw: None,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Raw YAML 구조체 (serde 역직렬화용)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawSchema {
    database: String,
    #[serde(default)]
    tables: Vec<RawTable>,
}

#[derive(Debug, Deserialize)]
struct RawTable {
    name: String,
    alias: Option<String>,
    key: Option<String>,
    #[serde(default)]
    columns: Vec<RawColumn>,
}

#[derive(Debug, Deserialize)]
struct RawColumn {
    name: String,
    #[serde(rename = "type")]
    column_type: Option<String>,
    nullable: Option<bool>,
    default: Option<String>,
    raw: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_schema() {
        let yaml = r#"
database: test
tables:
  - name: tableName
    alias: tbl
    columns:
      - name: columnA
        type: TINYINT UNSIGNED
        nullable: false
        default: "5"
      - name: columnB
        type: TIMESTAMP
"#;

        let db = SchemaParser::parse_yaml(yaml).unwrap();
        assert_eq!(db.name(), "test");
        assert_eq!(db.tables().len(), 1);

        let table = &db.tables()[0];
        assert_eq!(table.name(), "tableName");
        assert_eq!(table.alias(), Some("tbl"));
        assert_eq!(table.key(), "");

        let names: Vec<_> = table.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["columnA", "columnB"]);

        let a = table.find_column("columnA").unwrap();
        assert!(!a.nullable);
        assert_eq!(a.default.as_deref(), Some("5"));
        assert!(table.find_column("columnB").unwrap().nullable);
    }

    #[test]
    fn test_parse_raw_column_and_key() {
        let yaml = r#"
database: app
tables:
  - name: users
    key: "PRIMARY KEY (`id`)"
    columns:
      - { name: id, raw: "`id` INT UNSIGNED NOT NULL AUTO_INCREMENT" }
      - { name: email, type: "VARCHAR(255)", nullable: false }
"#;

        let db = SchemaParser::parse_yaml(yaml).unwrap();
        let users = db.require_table("users").unwrap();
        assert_eq!(users.key(), "PRIMARY KEY (`id`)");
        assert!(users.find_column("id").unwrap().is_raw());
    }

    #[test]
    fn test_missing_type_rejected() {
        let yaml = r#"
database: app
tables:
  - name: users
    columns:
      - name: email
"#;

        let err = SchemaParser::parse_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::SchemaValidation { .. }));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let yaml = r#"
database: app
tables:
  - name: users
    columns:
      - { name: email, type: TEXT }
  - name: users
    columns:
      - { name: email, type: TEXT }
"#;
        let err = SchemaParser::parse_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::DuplicateTable { .. }));

        let yaml = r#"
database: app
tables:
  - name: users
    columns:
      - { name: email, type: TEXT }
      - { name: email, type: TEXT }
"#;
        let err = SchemaParser::parse_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::DuplicateColumn { .. }));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = SchemaParser::parse_yaml("database: [").unwrap_err();
        assert_eq!(err.code(), "YAML_ERROR");
    }
}
