mod unit_get;
mod unit_put;

pub use unit_get::unit_get;
pub use unit_put::unit_put;

/// Route shape for unit codes: two letters, then digits and dashes.
pub(crate) fn is_unit_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() >= 2
        && bytes[..2].iter().all(|b| b.is_ascii_alphabetic())
        && bytes[2..].iter().all(|b| b.is_ascii_digit() || *b == b'-')
}

#[cfg(test)]
mod tests {
    use super::is_unit_code;

    #[test]
    fn matches_code_shapes() {
        assert!(is_unit_code("US"));
        assert!(is_unit_code("us"));
        assert!(is_unit_code("ME-012"));
        assert!(!is_unit_code("U"));
        assert!(!is_unit_code("123"));
        assert!(!is_unit_code("USA"));
        assert!(!is_unit_code("US_1"));
    }
}
