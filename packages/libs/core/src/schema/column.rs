//! 컬럼 정의
//!
//! 테이블의 컬럼 메타데이터를 정의합니다.

use serde::{Deserialize, Serialize};

/// 컬럼 정의
///
/// `raw`가 있으면 DDL 생성 시 구조화된 정의 대신 그 텍스트를 그대로 사용합니다.
/// 모델이 표현하지 못하는 SQL을 위한 탈출구입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// 컬럼 이름
    pub name: String,

    /// SQL 타입 표기 (예: `TINYINT UNSIGNED`)
    #[serde(rename = "type", default)]
    pub sql_type: String,

    /// NULL 허용 여부
    #[serde(default = "default_nullable")]
    pub nullable: bool,

    /// 기본값 (SQL 표현식, 그대로 출력)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// 원문 컬럼 정의
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

fn default_nullable() -> bool {
    true
}

impl Column {
    /// NULL 허용 컬럼 생성
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            nullable: true,
            default: None,
            raw: None,
        }
    }

    /// 원문 정의를 사용하는 컬럼 생성
    pub fn raw(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: String::new(),
            nullable: true,
            default: None,
            raw: Some(raw.into()),
        }
    }

    /// NOT NULL 지정
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// 기본값 지정
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// 원문 정의 사용 여부
    pub fn is_raw(&self) -> bool {
        self.raw.is_some()
    }
}
