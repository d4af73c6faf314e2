//! 식별자 인용
//!
//! 테이블/컬럼/DB 이름은 항상 백틱 한 쌍으로 감싸서 출력합니다.
//! 이름 안의 백틱은 이스케이프하지 않습니다.

/// 식별자 인용 문자
pub const IDENT_QUOTE: char = '`';

/// 식별자를 인용 문자로 감싸기
pub fn quote_ident(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push(IDENT_QUOTE);
    quoted.push_str(name);
    quoted.push(IDENT_QUOTE);
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("users"), "`users`");
        assert_eq!(quote_ident("with space"), "`with space`");
        assert_eq!(quote_ident(""), "``");
    }
}
