use crate::error::{CartError, Result};
use recipe_cart_common::Signatures;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 集計対象のレシピページ（変更はこのリストを編集する）
pub const DEFAULT_SOURCES: &[&str] = &[
    "https://jamilacuisine.ro/cascaval-pane-cu-ierburi-aromatice-video/",
    "https://jamilacuisine.ro/pui-cu-smantana-si-ciuperci-reteta-video/",
    "https://jamilacuisine.ro/pandispan-cu-cirese-visine-reteta-video/",
];

/// 買い物リストの保存先（カレントディレクトリ相対）
pub const DEFAULT_STORE_FILE: &str = "shopping_list.json";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                                  (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// 取得・抽出の調整項目
///
/// ソース一覧と保存先は固定で、ここでは変更できない。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timeout_seconds: u64,
    pub user_agent: String,
    pub signatures: Signatures,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: DEFAULT_USER_AGENT.into(),
            signatures: Signatures::default(),
        }
    }
}

impl Config {
    /// 設定を読み込み
    ///
    /// `path` 指定時はそのファイルが必須。未指定時は既定パスを探し、
    /// 無ければデフォルト設定を返す。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(CartError::Config(format!(
                        "設定ファイルが見つかりません: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::config_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&config_path)?;
        let config: Config = serde_json::from_str(&content).map_err(|e| {
            CartError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 既定の設定ファイルパス（~/.config/recipe-cart/config.json）
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("recipe-cart").join("config.json"))
    }

    /// 固定のソース一覧
    pub fn sources() -> Vec<String> {
        DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect()
    }

    /// 固定の保存先
    pub fn store_path() -> PathBuf {
        PathBuf::from(DEFAULT_STORE_FILE)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_seconds == 0 {
            return Err(CartError::Config("timeout_seconds は1以上にしてください".into()));
        }
        Ok(())
    }
}
