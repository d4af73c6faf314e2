//! Query 명령어

use ddk_core::schema::{Database, Table};
use ddk_sql::Query;

use crate::output::{self, OutputFormat};

/// SELECT 문장 생성 후 출력
pub fn select(
    db: &Database,
    format: OutputFormat,
    name: &str,
    columns: &[String],
    conditions: &[String],
) -> anyhow::Result<()> {
    let table = db.require_table(name)?;
    output::print_statement(format, build_select(table, columns, conditions)?)
}

/// SELECT 문장 조립
///
/// 컬럼은 테이블 선언과 대조해 인용하며 (없으면 `*`), 조건은 그대로 삽입해
/// `WHERE c1 AND c2 ...`로 잇습니다.
fn build_select(
    table: &Table,
    columns: &[String],
    conditions: &[String],
) -> anyhow::Result<String> {
    let projection = if columns.is_empty() {
        "*".to_string()
    } else {
        columns
            .iter()
            .map(|c| table.column(c))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ")
    };

    let mut query = Query::new();
    query
        .select_expr(&projection)
        .from_expr(&table.aliased_name());

    for (idx, cond) in conditions.iter().enumerate() {
        if idx == 0 {
            query.where_(cond);
        } else {
            query.and(cond);
        }
    }

    Ok(query.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddk_core::schema::Column;
    use ddk_core::Error;

    fn sample_table(alias: Option<&str>) -> Table {
        Table::new(
            "tableName",
            vec![
                Column::new("columnA", "TINYINT UNSIGNED"),
                Column::new("columnB", "TIMESTAMP"),
            ],
            "",
            alias.map(str::to_string),
        )
        .unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_select_all_columns() {
        let sql = build_select(&sample_table(None), &[], &[]).unwrap();
        assert_eq!(sql, "SELECT * FROM `tableName`");
    }

    #[test]
    fn test_select_aliased_columns() {
        let sql = build_select(
            &sample_table(Some("tbl")),
            &strings(&["columnA", "columnB"]),
            &[],
        )
        .unwrap();
        assert_eq!(
            sql,
            "SELECT `tbl`.`columnA`, `tbl`.`columnB` FROM `tableName` `tbl`"
        );
    }

    #[test]
    fn test_select_conditions_joined_with_and() {
        let sql = build_select(
            &sample_table(None),
            &strings(&["columnA"]),
            &strings(&["`columnA` > 1", "`columnB` IS NOT NULL"]),
        )
        .unwrap();
        assert_eq!(
            sql,
            "SELECT `columnA` FROM `tableName` WHERE `columnA` > 1 AND `columnB` IS NOT NULL"
        );
    }

    #[test]
    fn test_select_unknown_column() {
        let err = build_select(&sample_table(None), &strings(&["nope"]), &[]).unwrap_err();
        match err.downcast_ref::<Error>() {
            Some(Error::UnknownColumn { table, column }) => {
                assert_eq!(table, "tableName");
                assert_eq!(column, "nope");
            }
            other => panic!("Expected UnknownColumn, got {:?}", other),
        }
    }
}
