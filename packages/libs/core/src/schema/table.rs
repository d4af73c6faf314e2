//! 테이블 정의

use std::collections::HashSet;
use std::fmt;

use super::column::Column;
use super::types::{RowField, TypeMap};
use crate::error::{Error, Result};
use crate::ident::quote_ident;

/// 테이블 정의
///
/// 생성 시점에 컬럼 이름 중복을 검사하며, 생성 이후에는 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    /// 컬럼 목록 뒤에 그대로 붙는 키/인덱스 절 (빈 문자열 가능)
    key: String,
    alias: Option<String>,
}

impl Table {
    /// 테이블 정의 생성
    ///
    /// 같은 이름의 컬럼이 둘 이상이면 [`Error::DuplicateColumn`]을 반환합니다.
    pub fn new(
        name: impl Into<String>,
        columns: Vec<Column>,
        key: impl Into<String>,
        alias: Option<String>,
    ) -> Result<Self> {
        let name = name.into();

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(Error::DuplicateColumn {
                    table: name,
                    column: column.name.clone(),
                });
            }
        }

        Ok(Self {
            name,
            columns,
            key: key.into(),
            alias,
        })
    }

    /// 테이블 이름 (인용 전)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 선언 순서의 컬럼 목록
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// 키 절
    pub fn key(&self) -> &str {
        &self.key
    }

    /// 별칭
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// 컬럼 조회
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// 컬럼 존재 여부
    pub fn has_column(&self, name: &str) -> bool {
        self.find_column(name).is_some()
    }

    /// 인용된 컬럼 참조
    ///
    /// 별칭이 있으면 `` `alias`.`name` ``, 없으면 `` `name` ``.
    pub fn column(&self, name: &str) -> Result<String> {
        if !self.has_column(name) {
            return Err(Error::UnknownColumn {
                table: self.name.clone(),
                column: name.to_string(),
            });
        }

        Ok(match &self.alias {
            Some(alias) => format!("{}.{}", quote_ident(alias), quote_ident(name)),
            None => quote_ident(name),
        })
    }

    /// FROM/JOIN 피연산자 형태의 이름
    pub fn aliased_name(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} {}", quote_ident(&self.name), quote_ident(alias)),
            None => quote_ident(&self.name),
        }
    }

    /// 주어진 타입 매핑으로 행 형태 계산
    ///
    /// 원문 정의 컬럼은 타입을 알 수 없으므로 `sql_type`이 비어 있으면 Unknown으로 매핑됩니다.
    pub fn row_shape(&self, types: &TypeMap) -> Vec<RowField> {
        self.columns
            .iter()
            .map(|c| RowField {
                name: c.name.clone(),
                value_type: types.resolve(&c.sql_type),
                optional: c.nullable,
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.aliased_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ValueType;

    fn sample_table(alias: Option<&str>) -> Table {
        Table::new(
            "tableName",
            vec![
                Column::new("columnA", "TINYINT UNSIGNED")
                    .not_null()
                    .default_value("5"),
                Column::new("columnB", "TIMESTAMP"),
            ],
            "",
            alias.map(str::to_string),
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let result = Table::new(
            "t",
            vec![Column::new("a", "INT"), Column::new("a", "TEXT")],
            "",
            None,
        );

        match result {
            Err(Error::DuplicateColumn { table, column }) => {
                assert_eq!(table, "t");
                assert_eq!(column, "a");
            }
            other => panic!("Expected DuplicateColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_aliased_name() {
        assert_eq!(sample_table(Some("tbl")).aliased_name(), "`tableName` `tbl`");
        assert_eq!(sample_table(None).aliased_name(), "`tableName`");
        assert_eq!(sample_table(Some("tbl")).to_string(), "`tableName` `tbl`");
    }

    #[test]
    fn test_column_reference() {
        let aliased = sample_table(Some("tbl"));
        assert_eq!(aliased.column("columnA").unwrap(), "`tbl`.`columnA`");

        let plain = sample_table(None);
        assert_eq!(plain.column("columnB").unwrap(), "`columnB`");
    }

    #[test]
    fn test_unknown_column_reference() {
        let table = sample_table(Some("tbl"));
        let err = table.column("columnZ").unwrap_err();
        assert!(matches!(err, Error::UnknownColumn { ref column, .. } if column == "columnZ"));
    }

    #[test]
    fn test_row_shape() {
        let table = sample_table(None);
        let shape = table.row_shape(&TypeMap::mysql());

        assert_eq!(shape.len(), 2);
        assert_eq!(shape[0].name, "columnA");
        assert_eq!(shape[0].value_type, ValueType::Number);
        assert!(!shape[0].optional);
        assert_eq!(shape[1].value_type, ValueType::Date);
        assert!(shape[1].optional);
    }
}
