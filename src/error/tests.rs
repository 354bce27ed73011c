//! Tests for Loft error handling

use super::*;
use std::io;

#[test]
fn test_error_severity_display() {
    assert_eq!(format!("{}", ErrorSeverity::Info), "INFO");
    assert_eq!(format!("{}", ErrorSeverity::Warning), "WARN");
    assert_eq!(format!("{}", ErrorSeverity::Error), "ERROR");
    assert_eq!(format!("{}", ErrorSeverity::Critical), "CRITICAL");
}

#[test]
fn test_error_severity_ordering() {
    assert!(ErrorSeverity::Info < ErrorSeverity::Warning);
    assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
    assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
}

#[test]
fn test_loft_error_new() {
    let err = LoftError::new(ErrorType::Io, "SAVE_FAILED", "disk full");
    assert_eq!(err.severity, ErrorSeverity::Error);
    assert_eq!(err.kind, ErrorType::Io);
    assert_eq!(err.code, "SAVE_FAILED");
    assert_eq!(err.message, "disk full");
}

#[test]
fn test_loft_error_warning() {
    let err = LoftError::warning(ErrorType::Workspace, "RENAME_CONFLICT", "name taken");
    assert_eq!(err.severity, ErrorSeverity::Warning);
    assert_eq!(err.kind, ErrorType::Workspace);
}

#[test]
fn test_loft_error_display() {
    let err = LoftError::new(ErrorType::Io, "SAVE_FAILED", "disk full");
    assert_eq!(format!("{}", err), "[ERROR] IO(SAVE_FAILED): disk full");
}

#[test]
fn test_contains_msg() {
    let err = LoftError::new(ErrorType::Other, "E", "the quick brown fox");
    assert!(err.contains_msg("quick"));
    assert!(!err.contains_msg("lazy"));
}

#[test]
fn test_result_alias() {
    fn produce_error() -> Result<()> {
        Err(LoftError::new(ErrorType::Other, "FAIL", "reason"))
    }

    let res = produce_error();
    assert!(res.is_err());
    assert_eq!(res.unwrap_err().code, "FAIL");
}

#[test]
fn test_from_conversions() {
    let err_string: LoftError = "string error".to_string().into();
    assert_eq!(err_string.code, "GENERIC_ERROR");

    let io_err = io::Error::new(io::ErrorKind::NotFound, "not found");
    let err_io: LoftError = io_err.into();
    assert_eq!(err_io.kind, ErrorType::Io);
    assert_eq!(err_io.code, "IO_ERROR");
}

#[test]
fn test_error_manager_routes_by_severity() {
    use crate::notification::NotificationType;

    let mut manager = ErrorManager::new();
    manager.handle(LoftError::new(ErrorType::Io, "SAVE_FAILED", "boom"));
    manager.handle(LoftError::warning(ErrorType::Workspace, "W", "careful"));
    manager.handle(LoftError {
        severity: ErrorSeverity::Info,
        kind: ErrorType::Other,
        code: "I".to_string(),
        message: "fyi".to_string(),
    });

    // The error outranks the later warning and info on the status line
    assert_eq!(manager.notifications().len(), 3);
    let shown = manager.notifications().latest().unwrap();
    assert_eq!(shown.kind, NotificationType::Error);
    assert_eq!(shown.message, "boom");
}
