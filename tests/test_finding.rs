use skill_validate::finding::{Severity, ValidationResult};

#[test]
fn default_result_is_valid() {
    let result = ValidationResult::default();
    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn warnings_never_invalidate() {
    let mut result = ValidationResult::default();
    result.warning("style nit");
    result.warning("another nit");
    assert!(result.valid);
    assert_eq!(result.warnings.len(), 2);
}

#[test]
fn any_error_invalidates() {
    let mut result = ValidationResult::default();
    result.warning("nit");
    result.record(Severity::Error, "broken");
    assert!(!result.valid);
    assert_eq!(result.errors, vec!["broken"]);
}

#[test]
fn fatal_has_single_error_and_no_warnings() {
    let result = ValidationResult::fatal("SKILL.md not found");
    assert!(!result.valid);
    assert_eq!(result.errors, vec!["SKILL.md not found"]);
    assert!(result.warnings.is_empty());
}

#[test]
fn strict_mode_fails_on_warnings_only() {
    let mut result = ValidationResult::default();
    assert!(result.passes(true));

    result.warning("nit");
    assert!(result.passes(false));
    assert!(!result.passes(true));
    assert!(result.valid, "strictness must not touch `valid`");
}

#[test]
fn messages_list_errors_before_warnings() {
    let mut result = ValidationResult::default();
    result.warning("w1");
    result.error("e1");
    result.warning("w2");

    let messages: Vec<_> = result.messages().collect();
    assert_eq!(
        messages,
        vec![
            (Severity::Error, "e1"),
            (Severity::Warning, "w1"),
            (Severity::Warning, "w2"),
        ]
    );
}

#[test]
fn serializes_with_stable_key_order() {
    let mut result = ValidationResult::default();
    result.error("e");
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"valid":false,"errors":["e"],"warnings":[]}"#);
}

#[test]
fn severity_display() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.to_string(), "warning");
}
