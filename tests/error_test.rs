//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use food_cli::error::FoodCliError;

/// FoodCliErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        FoodCliError::Config("テスト設定エラー".to_string()),
        FoodCliError::MissingApiKey,
        FoodCliError::ApiCall("HTTP 403: Forbidden".to_string()),
        FoodCliError::LogParse("2行目: expected value".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingApiKeyエラーのメッセージ確認
#[test]
fn test_missing_api_key_message() {
    let err = FoodCliError::MissingApiKey;
    let display = format!("{}", err);

    assert!(display.contains("USDA_API_KEY"));
    assert!(display.contains("fdc.nal.usda.gov"));
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = FoodCliError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: FoodCliError = io_err.into();

    assert!(matches!(err, FoodCliError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: FoodCliError = json_err.into();

    assert!(matches!(err, FoodCliError::JsonParse(_)));
}
