use std::collections::HashMap;

use crate::cli_context::ReportContextBuilder;
use crate::config::Config;
use crate::constants::{CLUBHOUSE_API_URL, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, SHEETS_TOKEN_ENV, SPREADSHEET_ID_ENV, API_TOKEN_ENV};
use crate::error::ReportError;

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_missing_token_is_rejected() {
    let result = ReportContextBuilder::new().with_env(env(&[])).build();
    assert!(matches!(result, Err(ReportError::ApiTokenNotFound)));
}

#[test]
fn test_blank_token_is_rejected() {
    let result = ReportContextBuilder::new()
        .with_env(env(&[(API_TOKEN_ENV, "  ")]))
        .build();
    assert!(matches!(result, Err(ReportError::ApiTokenNotFound)));
}

#[test]
fn test_defaults() {
    let context = ReportContextBuilder::new()
        .with_api_token("test-token".to_string())
        .build()
        .unwrap();

    assert_eq!(context.api_token(), "test-token");
    assert_eq!(context.api_url, CLUBHOUSE_API_URL);
    assert_eq!(context.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(context.max_pages, DEFAULT_MAX_PAGES);
    assert_eq!(context.source_label, "CLI");
    assert!(context.spreadsheet_id.is_none());
}

#[test]
fn test_env_overrides_config_and_flags_override_env() {
    let mut config = Config::default();
    config.api_token = Some("from-file".to_string());
    config.spreadsheet_id = Some("file-sheet".to_string());
    config.headcounts.insert("Web".to_string(), 3);

    let context = ReportContextBuilder::from_config(config)
        .with_env(env(&[(API_TOKEN_ENV, "from-env"), (SPREADSHEET_ID_ENV, "env-sheet")]))
        .with_spreadsheet_id("flag-sheet".to_string())
        .with_headcount("Web", 5)
        .with_page_size(50)
        .build()
        .unwrap();

    assert_eq!(context.api_token(), "from-env");
    assert_eq!(context.spreadsheet_id.as_deref(), Some("flag-sheet"));
    assert_eq!(context.headcounts.get("Web"), Some(&5));
    assert_eq!(context.page_size, 50);
}

#[test]
fn test_zero_limits_are_invalid() {
    let result = ReportContextBuilder::new()
        .with_api_token("t".to_string())
        .with_page_size(0)
        .build();
    assert!(matches!(result, Err(ReportError::InvalidInput(_))));

    let result = ReportContextBuilder::new()
        .with_api_token("t".to_string())
        .with_max_pages(0)
        .build();
    assert!(matches!(result, Err(ReportError::InvalidInput(_))));
}

#[test]
fn test_sheets_client_requires_spreadsheet_and_token() {
    let context = ReportContextBuilder::new()
        .with_api_token("t".to_string())
        .build()
        .unwrap();
    assert!(matches!(context.sheets_client(), Err(ReportError::SpreadsheetNotConfigured)));

    let context = ReportContextBuilder::new()
        .with_api_token("t".to_string())
        .with_spreadsheet_id("doc".to_string())
        .build()
        .unwrap();
    assert!(matches!(context.sheets_client(), Err(ReportError::SheetsTokenNotFound)));

    let context = ReportContextBuilder::new()
        .with_env(env(&[(API_TOKEN_ENV, "t"), (SHEETS_TOKEN_ENV, "oauth")]))
        .with_spreadsheet_id("doc".to_string())
        .build()
        .unwrap();
    assert!(context.sheets_client().is_ok());
}

#[test]
fn test_clubhouse_client_from_context() {
    let context = ReportContextBuilder::new()
        .with_api_token("t".to_string())
        .build()
        .unwrap();
    assert!(context.clubhouse_client().is_ok());
}
