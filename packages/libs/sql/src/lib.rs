//! ddk-sql: 조각 기반 SQL 문장 빌더
//!
//! 스키마 정의(`ddk-core`)를 기반으로 DDL/DML 문장을 문자열로 생성합니다.
//! 값 리터럴은 이스케이프 없이 그대로 삽입되므로, 외부 입력은 호출자가 검증해야 합니다.
//!
//! # 모듈 구조
//!
//! - `fragment`: 문장 조각 타입과 토큰 분류
//! - `builder`: 조각 누적 및 렌더링
//! - `ddl`: CREATE/DROP/USE 문장 생성기

pub mod builder;
pub mod ddl;
pub mod fragment;

pub use builder::Query;
pub use ddl::{DatabaseDdl, DdlGenerator, TableDdl};
pub use fragment::{classify, Fragment, Punct};
