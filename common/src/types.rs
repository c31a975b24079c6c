//! 抽出結果と買い物リストの型定義
//!
//! - IngredientEntry: 材料1行（名前・分量・単位）
//! - IngredientGroup: 見出し単位の材料グループ
//! - RecipeResult: 1ページ分の抽出結果
//! - ShoppingList: 材料名 → 累計数量（永続化対象）

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 見出しが無いグループの名前
pub const DEFAULT_GROUP_NAME: &str = "Other";

/// 単位が無い材料の単位
pub const DEFAULT_UNIT: &str = "no unit";

/// 材料1行
///
/// `amount` はページ上の表記そのまま（未パース）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientEntry {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

impl IngredientEntry {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }
}

/// 材料グループ（「ソース」「マリネ液」など）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientGroup {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,
}

/// 1ソース分の抽出結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResult {
    #[serde(alias = "url")]
    pub source_location: String,
    pub ingredients: Vec<IngredientGroup>,
}

impl RecipeResult {
    /// 全グループの材料をドキュメント順に列挙
    pub fn entries(&self) -> impl Iterator<Item = (&IngredientGroup, &IngredientEntry)> {
        self.ingredients
            .iter()
            .flat_map(|group| group.ingredients.iter().map(move |entry| (group, entry)))
    }
}

/// 買い物リスト
///
/// JSONではフラットなオブジェクト `{"材料名": 数量}` として表現される。
/// キーは抽出時の表記そのまま（大文字小文字・空白を区別）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    totals: BTreeMap<String, f64>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 数量を加算（未登録なら新規登録）
    pub fn add(&mut self, name: &str, quantity: f64) {
        match self.totals.get_mut(name) {
            Some(total) => *total += quantity,
            None => {
                self.totals.insert(name.to_string(), quantity);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.totals.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.totals.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(name, total)| (name.as_str(), *total))
    }
}

impl FromIterator<(String, f64)> for ShoppingList {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            totals: iter.into_iter().collect(),
        }
    }
}
