//! SQL 문장 빌더
//!
//! 조각(Fragment)을 순서대로 쌓고 마지막에 한 번에 렌더링합니다.
//! 키워드 검증과 식별자 인용은 렌더러 한 곳에서만 처리합니다.
//!
//! 빌더는 소유한 `Vec<Fragment>`를 `&mut self`로 수정하며 체이닝합니다.
//! 조각의 순서는 호출 순서 그대로이며, 재정렬이나 중복 제거는 하지 않습니다.

use ddk_core::ident::quote_ident;
use ddk_core::keywords;
use ddk_core::{Error, Result};

use crate::fragment::{classify, Fragment, Punct};

/// SQL 문장 빌더
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    parts: Vec<Fragment>,
}

impl Query {
    /// 빈 빌더 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 조각 목록으로 생성
    pub fn from_parts(parts: Vec<Fragment>) -> Self {
        Self { parts }
    }

    /// 쌓인 조각들
    pub fn parts(&self) -> &[Fragment] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Fragment> {
        self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// 새 문장을 위해 비우기
    pub fn clear(&mut self) -> &mut Self {
        self.parts.clear();
        self
    }

    /// 조각 추가
    pub fn push(&mut self, part: impl Into<Fragment>) -> &mut Self {
        self.parts.push(part.into());
        self
    }

    /// 여러 조각 추가
    pub fn extend(&mut self, parts: impl IntoIterator<Item = Fragment>) -> &mut Self {
        self.parts.extend(parts);
        self
    }

    /// 문자열 토큰을 분류해서 추가 (키워드 또는 Raw)
    pub fn push_token(&mut self, token: &str) -> &mut Self {
        self.push(classify(token))
    }

    /// 키워드 추가 (검증은 렌더링 시)
    pub fn keyword(&mut self, keyword: &str) -> &mut Self {
        self.push(Fragment::keyword(keyword))
    }

    /// 여러 키워드 추가
    pub fn keywords(&mut self, keywords: &[&str]) -> &mut Self {
        self.extend(keywords.iter().map(|k| Fragment::keyword(*k)))
    }

    /// 최종 SQL 생성
    ///
    /// 조각을 하나의 공백으로 이어 붙입니다. 종결자(`;`)는 자동으로 붙이지 않습니다.
    /// 레지스트리에 없는 키워드 조각이 있으면 [`Error::InvalidKeyword`].
    pub fn render(&self) -> Result<String> {
        let mut sql = String::new();

        for (idx, part) in self.parts.iter().enumerate() {
            if idx > 0 {
                sql.push(' ');
            }
            write_fragment(&mut sql, part)?;
        }

        Ok(sql)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // 구두점
    // ─────────────────────────────────────────────────────────────────────────

    pub fn lparen(&mut self) -> &mut Self {
        self.push(Punct::LParen)
    }

    pub fn rparen(&mut self) -> &mut Self {
        self.push(Punct::RParen)
    }

    pub fn comma(&mut self) -> &mut Self {
        self.push(Punct::Comma)
    }

    pub fn semicolon(&mut self) -> &mut Self {
        self.push(Punct::Semicolon)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // SELECT / WHERE
    // ─────────────────────────────────────────────────────────────────────────

    /// `SELECT col1 col2 ...`
    ///
    /// 컬럼은 그대로 출력되므로 구분 쉼표가 필요하면 값에 포함해야 합니다.
    pub fn select(&mut self, columns: &[&str]) -> &mut Self {
        self.keyword("SELECT");
        self.extend(columns.iter().map(|c| Fragment::literal(*c)))
    }

    /// `SELECT expr`
    pub fn select_expr(&mut self, expr: &str) -> &mut Self {
        self.keyword("SELECT").push(Fragment::literal(expr))
    }

    /// ``FROM `t1` `t2` ...``
    pub fn from(&mut self, tables: &[&str]) -> &mut Self {
        self.keyword("FROM");
        self.extend(tables.iter().map(|t| Fragment::identifier(*t)))
    }

    /// `FROM expr` (이미 인용된 테이블 표현 등)
    pub fn from_expr(&mut self, expr: &str) -> &mut Self {
        self.keyword("FROM").push(Fragment::literal(expr))
    }

    pub fn where_(&mut self, cond: &str) -> &mut Self {
        self.keyword("WHERE").push(Fragment::condition(cond))
    }

    pub fn and(&mut self, cond: &str) -> &mut Self {
        self.keyword("AND").push(Fragment::condition(cond))
    }

    pub fn or(&mut self, cond: &str) -> &mut Self {
        self.keyword("OR").push(Fragment::condition(cond))
    }

    pub fn not(&mut self, cond: &str) -> &mut Self {
        self.keyword("NOT").push(Fragment::condition(cond))
    }

    pub fn is(&mut self, value: &str) -> &mut Self {
        self.keyword("IS").push(Fragment::literal(value))
    }

    pub fn is_not(&mut self, value: &str) -> &mut Self {
        self.keywords(&["IS", "NOT"]).push(Fragment::literal(value))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // 기타 문장 시작
    // ─────────────────────────────────────────────────────────────────────────

    /// `INSERT INTO table`
    pub fn insert_into(&mut self, table: &str) -> &mut Self {
        self.keywords(&["INSERT", "INTO"]).push(Fragment::literal(table))
    }

    pub fn create(&mut self) -> &mut Self {
        self.keyword("CREATE")
    }

    /// ``USE `db` ``
    pub fn use_db(&mut self, db: &str) -> &mut Self {
        self.keyword("USE").push(Fragment::identifier(db))
    }
}

fn write_fragment(sql: &mut String, part: &Fragment) -> Result<()> {
    match part {
        Fragment::Keyword(keyword) => {
            if !keywords::is_keyword(keyword) {
                return Err(Error::InvalidKeyword {
                    keyword: keyword.clone(),
                });
            }
            sql.push_str(keyword);
        }
        Fragment::Punct(punct) => sql.push_str(punct.as_str()),
        Fragment::LiteralIdentifier(value) => sql.push_str(&quote_ident(value)),
        Fragment::Raw(value) | Fragment::Literal(value) | Fragment::Condition(value) => {
            sql.push_str(value)
        }
        Fragment::ColumnDef {
            name,
            sql_type,
            nullable,
            default,
        } => {
            sql.push_str(&quote_ident(name));
            sql.push(' ');
            sql.push_str(sql_type);
            if !nullable {
                sql.push_str(" NOT NULL");
            }
            // 빈 기본값은 생략
            if let Some(default) = default.as_deref().filter(|d| !d.is_empty()) {
                sql.push_str(" DEFAULT ");
                sql.push_str(default);
            }
        }
    }
    Ok(())
}
