//! 買い物リストの永続化
//!
//! フラットなJSONオブジェクト `{"材料名": 数量}` を1ファイルに保存する。
//! - ファイルが無い → 空のリスト
//! - JSONとして不正 / 数量に変換できない値 → エラー（集計前に中断）
//! - 保存は全体の上書き（アトミックではない）

use crate::error::{CartError, Result};
use recipe_cart_common::{parse_quantity, ShoppingList};
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ShoppingListStore {
    path: PathBuf,
}

impl ShoppingListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存済みリストを読み込み
    pub fn load(&self) -> Result<ShoppingList> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "買い物リストが無いため空から開始");
            return Ok(ShoppingList::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;

        let Value::Object(map) = value else {
            return Err(self.corrupt("JSONオブジェクトではありません".into()));
        };

        let list = map
            .into_iter()
            .map(|(name, value)| -> Result<(String, f64)> {
                let quantity = coerce_quantity(&value).ok_or_else(|| {
                    CartError::InvalidStoredQuantity {
                        name: name.clone(),
                        value: value.to_string(),
                    }
                })?;
                Ok((name, quantity))
            })
            .collect::<Result<ShoppingList>>()?;

        debug!(path = %self.path.display(), items = list.len(), "買い物リスト読み込み");
        Ok(list)
    }

    /// リスト全体を書き出し（既存内容は上書き）
    pub fn save(&self, list: &ShoppingList) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, list)?;
        writer.flush()?;

        debug!(path = %self.path.display(), items = list.len(), "買い物リスト保存");
        Ok(())
    }

    fn corrupt(&self, reason: String) -> CartError {
        CartError::CorruptStore {
            path: self.path.display().to_string(),
            reason,
        }
    }
}

/// 保存値を数量に変換（数値・数値文字列・真偽値を受け付ける）
fn coerce_quantity(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_quantity(s).ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
