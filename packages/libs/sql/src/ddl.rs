//! DDL 생성기
//!
//! [`Table`]/[`Database`] 정의를 조각 목록으로 변환하고 [`Query`]로 렌더링합니다.
//! 모든 메서드는 정의와 인자에만 의존하는 순수 함수입니다.

use ddk_core::schema::{Database, Table};
use ddk_core::Result;

use crate::builder::Query;
use crate::fragment::{Fragment, Punct};

/// 테이블 DDL
pub trait TableDdl {
    /// `CREATE TABLE [IF NOT EXISTS] `name` ( col , ... ) key` 조각
    fn create_query(&self, if_not_exists: bool) -> Query;

    /// `CREATE TABLE` 문장
    fn create(&self, if_not_exists: bool) -> Result<String> {
        self.create_query(if_not_exists).render()
    }

    /// `DROP TABLE [IF EXISTS] `name`` 조각 (렌더링은 호출자가)
    fn drop(&self, if_exists: bool) -> Query;
}

impl TableDdl for Table {
    fn create_query(&self, if_not_exists: bool) -> Query {
        let mut query = Query::new();
        query.keywords(&["CREATE", "TABLE"]);
        if if_not_exists {
            query.keywords(&["IF", "NOT", "EXISTS"]);
        }
        query.push(Fragment::identifier(self.name())).lparen();

        for (idx, column) in self.columns().iter().enumerate() {
            if idx > 0 {
                query.push(Punct::Comma);
            }
            query.push(column);
        }
        query.rparen();

        // 빈 키 절은 조각을 만들지 않음 (끝 공백 방지)
        if !self.key().is_empty() {
            query.push(Fragment::raw(self.key()));
        }

        query
    }

    fn drop(&self, if_exists: bool) -> Query {
        let mut query = Query::new();
        query.keywords(&["DROP", "TABLE"]);
        if if_exists {
            query.keywords(&["IF", "EXISTS"]);
        }
        query.push(Fragment::identifier(self.name()));
        query
    }
}

/// 데이터베이스 DDL
pub trait DatabaseDdl {
    /// `CREATE DATABASE [IF NOT EXISTS] `name``
    fn create(&self, if_not_exists: bool) -> Result<String>;

    /// ``USE `name` ``
    fn use_db(&self) -> Result<String>;

    /// `DROP [IF EXISTS] `name``
    fn drop(&self, if_exists: bool) -> Result<String>;

    /// 테이블 이름으로 `CREATE TABLE IF NOT EXISTS` 생성
    ///
    /// 소유하지 않은 테이블이면 `TableNotFound`.
    fn ensure_table(&self, table: &str) -> Result<String>;

    /// 여러 테이블 `ensure_table`
    ///
    /// 순서를 유지하며, 첫 번째로 없는 테이블에서 바로 실패합니다.
    fn ensure_tables(&self, tables: &[&str]) -> Result<Vec<String>>;

    /// 선언된 모든 테이블 `ensure_table`
    fn ensure_all(&self) -> Result<Vec<String>>;
}

impl DatabaseDdl for Database {
    fn create(&self, if_not_exists: bool) -> Result<String> {
        let mut query = Query::new();
        query.keywords(&["CREATE", "DATABASE"]);
        if if_not_exists {
            query.keywords(&["IF", "NOT", "EXISTS"]);
        }
        query.push(Fragment::identifier(self.name())).render()
    }

    fn use_db(&self) -> Result<String> {
        Query::new().use_db(self.name()).render()
    }

    fn drop(&self, if_exists: bool) -> Result<String> {
        let mut query = Query::new();
        query.keyword("DROP");
        if if_exists {
            query.keywords(&["IF", "EXISTS"]);
        }
        query.push(Fragment::identifier(self.name())).render()
    }

    fn ensure_table(&self, table: &str) -> Result<String> {
        self.require_table(table)?.create(true)
    }

    fn ensure_tables(&self, tables: &[&str]) -> Result<Vec<String>> {
        tables.iter().map(|t| self.ensure_table(t)).collect()
    }

    fn ensure_all(&self) -> Result<Vec<String>> {
        self.tables().iter().map(|t| t.create(true)).collect()
    }
}

/// 전체 스크립트 생성기
pub struct DdlGenerator;

impl DdlGenerator {
    /// DB 생성 → USE → 모든 테이블 생성 순서의 문장 목록
    pub fn bootstrap(db: &Database) -> Result<Vec<String>> {
        let mut sqls = vec![db.create(true)?, db.use_db()?];
        sqls.extend(db.ensure_all()?);
        Ok(sqls)
    }

    /// 문장 목록을 `;`로 끝나는 줄들로 합치기
    pub fn to_script(statements: &[String]) -> String {
        statements
            .iter()
            .map(|s| format!("{};\n", s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddk_core::schema::Column;
    use ddk_core::Error;

    fn sample_table() -> Table {
        Table::new(
            "tableName",
            vec![
                Column::new("columnA", "TINYINT UNSIGNED")
                    .not_null()
                    .default_value("5"),
                Column::new("columnB", "TIMESTAMP"),
            ],
            "",
            Some("tbl".to_string()),
        )
        .unwrap()
    }

    fn sample_db() -> Database {
        Database::new("test", vec![sample_table()]).unwrap()
    }

    #[test]
    fn test_create_table() {
        assert_eq!(
            sample_table().create(true).unwrap(),
            "CREATE TABLE IF NOT EXISTS `tableName` ( `columnA` TINYINT UNSIGNED NOT NULL DEFAULT 5 , `columnB` TIMESTAMP )"
        );
        assert_eq!(
            sample_table().create(false).unwrap(),
            "CREATE TABLE `tableName` ( `columnA` TINYINT UNSIGNED NOT NULL DEFAULT 5 , `columnB` TIMESTAMP )"
        );
    }

    #[test]
    fn test_create_table_with_raw_column_and_key() {
        let table = Table::new(
            "users",
            vec![
                Column::raw("id", "`id` INT UNSIGNED NOT NULL AUTO_INCREMENT"),
                Column::new("email", "VARCHAR(255)").not_null(),
            ],
            "PRIMARY KEY (`id`)",
            None,
        )
        .unwrap();

        assert_eq!(
            table.create(false).unwrap(),
            "CREATE TABLE `users` ( `id` INT UNSIGNED NOT NULL AUTO_INCREMENT , `email` VARCHAR(255) NOT NULL ) PRIMARY KEY (`id`)"
        );
    }

    #[test]
    fn test_create_table_without_columns() {
        let table = Table::new("empty", vec![], "", None).unwrap();
        assert_eq!(table.create(false).unwrap(), "CREATE TABLE `empty` ( )");
    }

    #[test]
    fn test_drop_table() {
        let table = sample_table();
        assert_eq!(
            table.drop(true).render().unwrap(),
            "DROP TABLE IF EXISTS `tableName`"
        );
        assert_eq!(table.drop(false).render().unwrap(), "DROP TABLE `tableName`");
    }

    #[test]
    fn test_create_database() {
        let db = sample_db();
        assert_eq!(db.create(true).unwrap(), "CREATE DATABASE IF NOT EXISTS `test`");
        assert_eq!(db.create(false).unwrap(), "CREATE DATABASE `test`");
    }

    #[test]
    fn test_use_and_drop_database() {
        let db = sample_db();
        assert_eq!(db.use_db().unwrap(), "USE `test`");
        assert_eq!(DatabaseDdl::drop(&db, true).unwrap(), "DROP IF EXISTS `test`");
        assert_eq!(DatabaseDdl::drop(&db, false).unwrap(), "DROP `test`");
    }

    #[test]
    fn test_ensure_table() {
        let db = sample_db();
        assert_eq!(
            db.ensure_table("tableName").unwrap(),
            sample_table().create(true).unwrap()
        );
    }

    #[test]
    fn test_ensure_missing_table() {
        let db = sample_db();
        let err = db.ensure_table("missing").unwrap_err();
        assert!(matches!(err, Error::TableNotFound { ref name } if name == "missing"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_ensure_tables_fails_fast() {
        let other = Table::new("other", vec![Column::new("id", "INT")], "", None).unwrap();
        let db = Database::new("test", vec![sample_table(), other]).unwrap();

        let sqls = db.ensure_tables(&["other", "tableName"]).unwrap();
        assert_eq!(sqls.len(), 2);
        assert!(sqls[0].contains("`other`"));
        assert!(sqls[1].contains("`tableName`"));

        let err = db
            .ensure_tables(&["other", "nope", "also_missing"])
            .unwrap_err();
        assert!(matches!(err, Error::TableNotFound { ref name } if name == "nope"));
    }

    #[test]
    fn test_statements_are_idempotent() {
        let db = sample_db();
        assert_eq!(db.create(true).unwrap(), db.create(true).unwrap());
        assert_eq!(db.ensure_all().unwrap(), db.ensure_all().unwrap());
    }

    #[test]
    fn test_bootstrap_script() {
        let db = sample_db();
        let sqls = DdlGenerator::bootstrap(&db).unwrap();

        assert_eq!(sqls.len(), 3);
        assert_eq!(sqls[0], "CREATE DATABASE IF NOT EXISTS `test`");
        assert_eq!(sqls[1], "USE `test`");
        assert!(sqls[2].starts_with("CREATE TABLE IF NOT EXISTS `tableName`"));

        let script = DdlGenerator::to_script(&sqls[..2]);
        assert_eq!(script, "CREATE DATABASE IF NOT EXISTS `test`;\nUSE `test`;\n");
    }
}
