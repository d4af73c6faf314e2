//! 공통 에러 타입
//!
//! ddlkit 전체에서 사용되는 에러 타입을 정의합니다.
//! 모든 에러는 해당 호출에서 즉시 반환되며, 코어는 재시도나 대체값을 제공하지 않습니다.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// ddlkit 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Definition Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("duplicate column name in table `{table}`: {column}")]
    DuplicateColumn { table: String, column: String },

    #[error("duplicate table name: {name}")]
    DuplicateTable { name: String },

    #[error("no table with name `{name}`")]
    TableNotFound { name: String },

    #[error("table `{table}` has no column `{column}`")]
    UnknownColumn { table: String, column: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Render Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("invalid keyword: {keyword}")]
    InvalidKeyword { keyword: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Schema File Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("schema validation error: {message}")]
    SchemaValidation { message: String },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// 이름 중복 에러 여부 (컬럼/테이블)
    pub fn is_duplicate_name(&self) -> bool {
        matches!(
            self,
            Error::DuplicateColumn { .. } | Error::DuplicateTable { .. }
        )
    }

    /// 에러 코드 (CLI/JSON 출력용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::DuplicateColumn { .. } => "DUPLICATE_COLUMN",
            Error::DuplicateTable { .. } => "DUPLICATE_TABLE",
            Error::TableNotFound { .. } => "TABLE_NOT_FOUND",
            Error::UnknownColumn { .. } => "UNKNOWN_COLUMN",
            Error::InvalidKeyword { .. } => "INVALID_KEYWORD",
            Error::SchemaValidation { .. } => "SCHEMA_VALIDATION_ERROR",
            Error::Yaml(_) => "YAML_ERROR",
            Error::Json(_) => "JSON_ERROR",
            Error::Io(_) => "IO_ERROR",
        }
    }
}
