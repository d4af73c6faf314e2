//! ddk-core: ddlkit 공통 핵심 라이브러리
//!
//! 이 크레이트는 SQL 빌더(`ddk-sql`)와 CLI가 공유하는 핵심 타입을 제공합니다.
//!
//! # 모듈 구조
//!
//! - `schema`: 테이블/DB 정의 및 YAML 파싱
//! - `keywords`: SQL 키워드 레지스트리
//! - `ident`: 식별자 인용
//! - `error`: 공통 에러 타입

pub mod error;
pub mod ident;
pub mod keywords;
pub mod schema;

pub use error::{Error, Result};
