//! 컬럼 값 타입 매핑
//!
//! SQL 타입 표기(`TINYINT UNSIGNED`, `ENUM('a', 'b')` 등)를 호스트 값 타입으로 매핑합니다.
//! 매핑은 호출자가 명시적으로 제공하는 [`TypeMap`]으로만 이루어지며,
//! DDL 렌더링에는 관여하지 않습니다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 호스트 값 타입
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// 숫자 (정수/부동소수점/불리언)
    Number,

    /// 날짜/시각
    Date,

    /// 바이트 배열
    Buffer,

    /// 문자열 (정밀도 보장이 필요한 DECIMAL/BIGINT 포함)
    Text,

    /// ENUM 허용 값 목록
    Enum(Vec<String>),

    /// 매핑 불가
    Unknown,
}

/// 행 형태의 필드 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowField {
    /// 컬럼 이름
    pub name: String,

    /// 값 타입
    #[serde(rename = "type")]
    pub value_type: ValueType,

    /// NULL 허용 컬럼이면 true
    pub optional: bool,
}

/// SQL 타입 표기 → 값 타입 매핑
///
/// 명시적으로 등록한 표기(대문자 기준)가 규칙보다 우선합니다.
#[derive(Debug, Clone, Default)]
pub struct TypeMap {
    explicit: HashMap<String, ValueType>,
    mysql_rules: bool,
}

impl TypeMap {
    /// 빈 매핑 (등록되지 않은 표기는 모두 Unknown)
    pub fn new() -> Self {
        Self::default()
    }

    /// MySQL 타입 표기 규칙을 포함한 매핑
    pub fn mysql() -> Self {
        Self {
            explicit: HashMap::new(),
            mysql_rules: true,
        }
    }

    /// 표기 등록 (기존 규칙/등록을 덮어씀)
    pub fn insert(&mut self, sql_type: &str, value_type: ValueType) -> &mut Self {
        self.explicit
            .insert(sql_type.trim().to_uppercase(), value_type);
        self
    }

    /// 값 타입 결정
    pub fn resolve(&self, sql_type: &str) -> ValueType {
        let sql_type = sql_type.trim();
        if let Some(value_type) = self.explicit.get(&sql_type.to_uppercase()) {
            return value_type.clone();
        }
        if self.mysql_rules {
            return infer_mysql(sql_type);
        }
        ValueType::Unknown
    }
}

fn infer_mysql(sql_type: &str) -> ValueType {
    let upper = sql_type.to_uppercase();

    if is_number_type(&upper) {
        ValueType::Number
    } else if matches!(upper.as_str(), "TIMESTAMP" | "DATE" | "DATETIME") {
        ValueType::Date
    } else if is_buffer_type(&upper) {
        ValueType::Buffer
    } else if is_text_type(&upper) {
        ValueType::Text
    } else if let Some(body) = call_body(sql_type, "ENUM") {
        // 대소문자가 정확히 `ENUM(`일 때만 값 목록을 추출
        parse_enum_values(body).map_or(ValueType::Unknown, ValueType::Enum)
    } else if call_body(&upper, "ENUM").is_some() {
        ValueType::Text
    } else {
        ValueType::Unknown
    }
}

fn is_number_type(upper: &str) -> bool {
    if matches!(upper, "YEAR" | "FLOAT" | "DOUBLE" | "BOOLEAN") {
        return true;
    }

    let base = upper
        .strip_suffix(" UNSIGNED")
        .or_else(|| upper.strip_suffix(" SIGNED"))
        .unwrap_or(upper);
    matches!(base, "INT" | "TINYINT" | "SMALLINT" | "MEDIUMINT")
}

fn is_buffer_type(upper: &str) -> bool {
    matches!(
        upper,
        "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" | "BINARY" | "VARBINARY" | "BIT"
    )
}

fn is_text_type(upper: &str) -> bool {
    if matches!(
        upper,
        "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT" | "DECIMAL" | "BIGINT" | "TIME" | "GEOMETRY"
    ) {
        return true;
    }
    if call_body(upper, "SET").is_some() {
        return true;
    }

    ["CHAR", "VARCHAR"].iter().any(|name| {
        call_body(upper, name).is_some_and(|len| len.trim().parse::<f64>().is_ok())
    })
}

/// `NAME(body)` 형태면 body 반환
fn call_body<'a>(sql_type: &'a str, name: &str) -> Option<&'a str> {
    sql_type
        .strip_prefix(name)?
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// `'a', "b"` → `["a", "b"]`
///
/// 값은 따옴표 단위로 읽으므로 `'a,b'`처럼 쉼표를 포함할 수 있고,
/// 같은 따옴표 두 개(`''`)는 따옴표 하나로 취급합니다.
fn parse_enum_values(body: &str) -> Option<Vec<String>> {
    let mut values = Vec::new();
    let mut chars = body.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let quote = chars.next().filter(|c| matches!(c, '\'' | '"'))?;
        let mut value = String::new();
        loop {
            let c = chars.next()?;
            if c == quote && chars.next_if_eq(&quote).is_none() {
                break;
            }
            value.push(c);
        }
        values.push(value);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            None => return Some(values),
            Some(',') => continue,
            Some(_) => return None,
        }
    }
}
