use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::CS1002.to_string(), "CS1002");
    assert_eq!(ErrorCode::CS0267.as_str(), "CS0267");
}

#[test]
fn test_all_codes_are_unique_and_parse_back() {
    let mut seen = std::collections::HashSet::new();
    for code in ErrorCode::ALL {
        assert!(seen.insert(code.as_str()), "duplicate {code}");
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!("cs1526".parse::<ErrorCode>(), Ok(ErrorCode::CS1526));
    assert_eq!("CS0000".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_every_code_belongs_to_exactly_one_phase() {
    for code in ErrorCode::ALL {
        let phases = [
            code.is_options_error(),
            code.is_lexer_error(),
            code.is_parser_error(),
        ];
        assert_eq!(phases.iter().filter(|&&b| b).count(), 1, "{code}");
    }
}

#[test]
fn test_only_warning_directive_is_a_warning() {
    let warnings: Vec<_> = ErrorCode::ALL.iter().filter(|c| c.is_warning()).collect();
    assert_eq!(warnings, vec![&ErrorCode::CS1030]);
    assert_eq!(ErrorCode::CS1030.default_severity(), Severity::Warning);
    assert_eq!(ErrorCode::CS1002.default_severity(), Severity::Error);
}

#[test]
fn test_templates_are_non_empty() {
    for code in ErrorCode::ALL {
        assert!(!code.template().is_empty(), "{code}");
    }
}
