use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ページ取得エラー ({url}): {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("買い物リストが破損しています ({path}): {reason}")]
    CorruptStore { path: String, reason: String },

    #[error("買い物リストの数量が不正です: '{name}' = {value}")]
    InvalidStoredQuantity { name: String, value: String },

    #[error("抽出条件エラー: {0}")]
    Extraction(#[from] recipe_cart_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CartError>;
