use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoodCliError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("USDA_API_KEYが設定されていません。環境変数か ~/pa/usda で設定してください (取得: https://fdc.nal.usda.gov/api-key-signup/)")]
    MissingApiKey,

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("記録ファイルの解析に失敗: {0}")]
    LogParse(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FoodCliError>;
