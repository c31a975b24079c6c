//! 買い物リスト集計
//!
//! 抽出済みレシピの材料数量を、材料名をキーに既存リストへ加算する。
//! 単位は参照しない（同名なら単位が違っても合算）。
//! 分量が空・数値でない材料、合計が有限値でなくなる材料はスキップし、理由を記録する。

use crate::quantity::{parse_quantity, QuantityError};
use crate::types::{RecipeResult, ShoppingList};
use tracing::{debug, warn};

/// スキップした材料
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    /// 取得元（URL）
    pub source_location: String,
    pub group: String,
    pub name: String,
    pub raw_amount: String,
    pub reason: QuantityError,
}

impl std::fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            QuantityError::Empty => write!(
                f,
                "Skipping ingredient '{}' because quantity is empty.",
                self.name
            ),
            QuantityError::Invalid(raw) => write!(
                f,
                "Could not convert quantity '{}' to float for ingredient '{}'. Check for discrepancies in ingredient quantities.",
                raw, self.name
            ),
            QuantityError::Overflow(raw) => write!(
                f,
                "Skipping quantity '{}' for ingredient '{}' because the total would overflow.",
                raw, self.name
            ),
        }
    }
}

/// 集計結果
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub list: ShoppingList,
    /// 加算した材料行の数
    pub added: usize,
    /// スキップした材料（走査順）
    pub skipped: Vec<SkippedEntry>,
}

/// 既存リストに抽出結果を加算
///
/// 走査順は バッチ → レシピ → グループ → 材料。
/// 順序が影響するのはスキップの記録順のみで、合計値は順序に依存しない。
pub fn aggregate(prior: ShoppingList, batch: &[RecipeResult]) -> Aggregation {
    let mut aggregation = Aggregation {
        list: prior,
        ..Default::default()
    };

    for recipe in batch {
        for (group, entry) in recipe.entries() {
            let checked = parse_quantity(&entry.amount).and_then(|quantity| {
                let total = aggregation.list.get(&entry.name).unwrap_or(0.0) + quantity;
                if total.is_finite() {
                    Ok(quantity)
                } else {
                    Err(QuantityError::Overflow(entry.amount.clone()))
                }
            });

            match checked {
                Ok(quantity) => {
                    debug!(ingredient = %entry.name, quantity, unit = %entry.unit, "加算");
                    aggregation.list.add(&entry.name, quantity);
                    aggregation.added += 1;
                }
                Err(reason) => {
                    let skipped = SkippedEntry {
                        source_location: recipe.source_location.clone(),
                        group: group.name.clone(),
                        name: entry.name.clone(),
                        raw_amount: entry.amount.clone(),
                        reason,
                    };
                    warn!(source = %skipped.source_location, "{}", skipped);
                    aggregation.skipped.push(skipped);
                }
            }
        }
    }

    aggregation
}
