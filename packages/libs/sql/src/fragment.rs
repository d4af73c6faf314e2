//! 문장 조각 (Fragment)
//!
//! 렌더링 전의 분류된 토큰 하나입니다.
//! 텍스트 변환은 [`Query::render`](crate::Query::render)만 수행합니다.

use ddk_core::keywords;
use ddk_core::schema::Column;

/// 구두점
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punct {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
}

impl Punct {
    pub fn as_str(self) -> &'static str {
        match self {
            Punct::LParen => "(",
            Punct::RParen => ")",
            Punct::Semicolon => ";",
            Punct::Comma => ",",
        }
    }
}

/// 문장 조각
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// SQL 키워드 (렌더링 시 레지스트리로 검증)
    Keyword(String),

    /// 구두점
    Punct(Punct),

    /// 인용할 식별자
    LiteralIdentifier(String),

    /// 그대로 출력하는 텍스트
    Raw(String),

    /// 그대로 출력하는 값/표현식
    Literal(String),

    /// 그대로 출력하는 조건식
    Condition(String),

    /// 구조화된 컬럼 정의
    ColumnDef {
        name: String,
        sql_type: String,
        nullable: bool,
        default: Option<String>,
    },
}

impl Fragment {
    pub fn keyword(value: impl Into<String>) -> Self {
        Fragment::Keyword(value.into())
    }

    pub fn identifier(value: impl Into<String>) -> Self {
        Fragment::LiteralIdentifier(value.into())
    }

    pub fn raw(value: impl Into<String>) -> Self {
        Fragment::Raw(value.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Fragment::Literal(value.into())
    }

    pub fn condition(value: impl Into<String>) -> Self {
        Fragment::Condition(value.into())
    }
}

impl From<Punct> for Fragment {
    fn from(punct: Punct) -> Self {
        Fragment::Punct(punct)
    }
}

/// 컬럼 → 조각 (원문 정의가 있으면 Raw)
impl From<&Column> for Fragment {
    fn from(column: &Column) -> Self {
        match &column.raw {
            Some(raw) => Fragment::Raw(raw.clone()),
            None => Fragment::ColumnDef {
                name: column.name.clone(),
                sql_type: column.sql_type.clone(),
                nullable: column.nullable,
                default: column.default.clone(),
            },
        }
    }
}

/// 문자열 토큰 분류
///
/// 레지스트리에 있는 키워드면 `Keyword`, 아니면 `Raw`.
pub fn classify(token: &str) -> Fragment {
    if keywords::is_keyword(token) {
        Fragment::keyword(token)
    } else {
        Fragment::raw(token)
    }
}
