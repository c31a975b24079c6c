//! レシピページからの材料抽出
//!
//! WP Recipe Maker 形式のマークアップを前提に、
//! 材料グループ → 材料行 → 名前/分量/単位 の順に検索する。
//!
//! 見出し・単位が無い場合はデフォルト値で補完し、
//! 名前か分量が無い材料行は黙って捨てる。抽出自体は失敗しない。

use crate::error::Result;
use crate::markup::{Matcher, Node, Page, Signature};
use crate::types::{IngredientEntry, IngredientGroup, DEFAULT_GROUP_NAME, DEFAULT_UNIT};
use serde::{Deserialize, Serialize};

/// 抽出に使うマークアップ条件一式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signatures {
    pub group: Signature,
    pub group_name: Signature,
    pub ingredient: Signature,
    pub name: Signature,
    pub amount: Signature,
    pub unit: Signature,
}

impl Default for Signatures {
    fn default() -> Self {
        Self {
            group: Signature::new("div", "wprm-recipe-ingredients-container"),
            group_name: Signature::new("h3", "wprm-recipe-group-name"),
            ingredient: Signature::new("li", "wprm-recipe-ingredient"),
            name: Signature::new("span", "wprm-recipe-ingredient-name"),
            amount: Signature::new("span", "wprm-recipe-ingredient-amount"),
            unit: Signature::new("span", "wprm-recipe-ingredient-unit"),
        }
    }
}

/// 材料抽出器
#[derive(Debug, Clone)]
pub struct Extractor {
    group: Matcher,
    group_name: Matcher,
    ingredient: Matcher,
    name: Matcher,
    amount: Matcher,
    unit: Matcher,
}

impl Extractor {
    pub fn new(signatures: &Signatures) -> Result<Self> {
        Ok(Self {
            group: signatures.group.compile()?,
            group_name: signatures.group_name.compile()?,
            ingredient: signatures.ingredient.compile()?,
            name: signatures.name.compile()?,
            amount: signatures.amount.compile()?,
            unit: signatures.unit.compile()?,
        })
    }

    /// ページ内容から材料グループを抽出（ドキュメント順）
    pub fn extract(&self, html: &str) -> Vec<IngredientGroup> {
        let page = Page::parse(html);

        page.root()
            .find_all(&self.group)
            .iter()
            .map(|container| self.extract_group(container))
            .collect()
    }

    fn extract_group(&self, container: &Node<'_>) -> IngredientGroup {
        let name = container
            .find_first(&self.group_name)
            .map(|heading| heading.text())
            .unwrap_or_else(|| DEFAULT_GROUP_NAME.to_string());

        let ingredients = container
            .find_all(&self.ingredient)
            .iter()
            .filter_map(|item| self.extract_entry(item))
            .collect();

        IngredientGroup { name, ingredients }
    }

    fn extract_entry(&self, item: &Node<'_>) -> Option<IngredientEntry> {
        let name = item.find_first(&self.name)?.text();
        let amount = item.find_first(&self.amount)?.text();

        let unit = item
            .find_first(&self.unit)
            .map(|node| node.text())
            .filter(|unit| !unit.is_empty())
            .unwrap_or_else(|| DEFAULT_UNIT.to_string());

        Some(IngredientEntry { name, amount, unit })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        // 組み込み条件はすべて有効なセレクタ
        Self::new(&Signatures::default()).unwrap_or_else(|e| unreachable!("{e}"))
    }
}

/// デフォルト条件でページ内容から材料グループを抽出
pub fn extract(html: &str) -> Vec<IngredientGroup> {
    Extractor::default().extract(html)
}
