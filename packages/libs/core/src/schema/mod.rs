//! 스키마 정의
//!
//! # 개요
//!
//! 테이블/DB 정의는 코드에서 직접 생성하거나 `schema.yaml` 파일에서 파싱합니다.
//! 생성 시점에 이름 중복을 검사하며, 생성 이후에는 변경되지 않습니다.
//!
//! # 모듈 구조
//!
//! - `column`: 컬럼 정의
//! - `table`: 테이블 정의
//! - `database`: 데이터베이스 정의
//! - `types`: SQL 타입 표기 → 값 타입 매핑
//! - `parser`: YAML 파싱 로직

mod column;
mod database;
mod parser;
mod table;
mod types;

pub use column::Column;
pub use database::Database;
pub use parser::SchemaParser;
pub use table::Table;
pub use types::{RowField, TypeMap, ValueType};
