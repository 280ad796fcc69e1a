use crate::error::{ReportError, ErrorContext};
use crate::report_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found"
    ));

    let report_result = result.context("Failed to read config file");

    match report_result {
        Err(ReportError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected ReportError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Spreadsheet ID not found");

    match result {
        Err(ReportError::Unknown(msg)) => assert_eq!(msg, "Spreadsheet ID not found"),
        _ => panic!("Expected ReportError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied"
    ));

    let report_result = result.with_context(|| {
        format!("Failed to write config at path: {}", "/tmp/config.json")
    });

    match report_result {
        Err(ReportError::Unknown(msg)) => {
            assert!(msg.contains("Failed to write config at path: /tmp/config.json"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected ReportError::Unknown"),
    }
}

#[test]
fn test_report_error_macro() {
    let error = report_error!(ApiError, "Request failed");
    match error {
        ReportError::ApiError(msg) => assert_eq!(msg, "Request failed"),
        _ => panic!("Expected ReportError::ApiError"),
    }

    let error = report_error!(MalformedResponse, "missing field `{}`", "data");
    match error {
        ReportError::MalformedResponse(msg) => assert_eq!(msg, "missing field `data`"),
        _ => panic!("Expected ReportError::MalformedResponse"),
    }
}

#[test]
fn test_user_facing_messages() {
    assert!(ReportError::ApiTokenNotFound.to_string().contains("CLUBHOUSE_API_TOKEN"));
    assert_eq!(
        ReportError::UnknownStoryType { story_id: 12, story_type: "epic".to_string() }.to_string(),
        "Story 12 has unknown story type 'epic'"
    );
    assert!(ReportError::PageLimitExceeded(100).to_string().contains("100 pages"));
}
