//! 데이터베이스 정의
//!
//! 이름과 테이블 목록으로 구성됩니다.
//! DDL 문장은 `ddk-sql`이 이 정의를 기반으로 생성합니다.

use std::collections::HashSet;

use super::table::Table;
use crate::error::{Error, Result};

/// 데이터베이스 정의
///
/// 테이블은 선언 순서대로 보관되며, 이름은 DB 내에서 유일해야 합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    name: String,
    tables: Vec<Table>,
}

impl Database {
    /// 데이터베이스 정의 생성
    ///
    /// 같은 이름의 테이블이 둘 이상이면 [`Error::DuplicateTable`]을 반환합니다.
    pub fn new(name: impl Into<String>, tables: Vec<Table>) -> Result<Self> {
        let mut seen = HashSet::new();
        for table in &tables {
            if !seen.insert(table.name()) {
                return Err(Error::DuplicateTable {
                    name: table.name().to_string(),
                });
            }
        }

        Ok(Self {
            name: name.into(),
            tables,
        })
    }

    /// DB 이름 (인용 전)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 모든 테이블
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// 모든 테이블 이름
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name())
    }

    /// 테이블 조회
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name() == name)
    }

    /// 테이블 존재 여부
    pub fn has_table(&self, name: &str) -> bool {
        self.table(name).is_some()
    }

    /// 테이블 조회 (없으면 [`Error::TableNotFound`])
    pub fn require_table(&self, name: &str) -> Result<&Table> {
        self.table(name).ok_or_else(|| Error::TableNotFound {
            name: name.to_string(),
        })
    }
}
