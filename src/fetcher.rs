//! レシピページ取得
//!
//! HTTPステータスは判定しない（エラーページも本文としてそのまま抽出に回す）。
//! 接続失敗・タイムアウトなどの通信エラーのみ失敗とする。

use crate::config::Config;
use crate::error::{CartError, Result};
use std::time::Duration;
use tracing::{debug, warn};

pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| CartError::Config(format!("HTTPクライアント作成失敗: {}", e)))?;

        Ok(Self { client })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(Duration::from_secs(config.timeout_seconds), &config.user_agent)
    }

    /// ページ本文を取得
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let fetch_error = |source| CartError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(fetch_error)?;

        let status = response.status();
        if status.is_success() {
            debug!(url, %status, "取得完了");
        } else {
            warn!(url, %status, "HTTPステータスが成功ではありません（本文をそのまま解析します）");
        }

        response.text().await.map_err(fetch_error)
    }
}
