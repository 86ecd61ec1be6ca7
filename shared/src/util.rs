/// Trim a submitted text field, treating blank input as absent.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Matricules handled by the evaluation workflow are numeric staff codes.
pub fn is_numeric_matricule(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  abc ")), Some("abc"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_numeric_matricule() {
        assert!(is_numeric_matricule("10452"));
        assert!(is_numeric_matricule(" 7 "));
        assert!(!is_numeric_matricule(""));
        assert!(!is_numeric_matricule("A12"));
        assert!(!is_numeric_matricule("12.5"));
    }
}
