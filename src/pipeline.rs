//! 取得 → 抽出 → 集計 → 保存 の一括処理
//!
//! ソースは1件ずつ順番に処理する。どれか1件でも取得に失敗したら
//! その時点で中断し、買い物リストは書き換えない。

use crate::config::Config;
use crate::error::Result;
use crate::fetcher::PageFetcher;
use crate::store::ShoppingListStore;
use indicatif::ProgressBar;
use recipe_cart_common::{aggregate, Extractor, RecipeResult, ShoppingList, SkippedEntry};
use tracing::{debug, info};

/// 実行オプション
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// 集計のみ行い保存しない
    pub dry_run: bool,
}

/// 実行結果
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// 処理したソース数
    pub sources: usize,
    /// 材料が見つかったレシピ
    pub recipes: Vec<RecipeResult>,
    /// 加算した材料行の数
    pub added: usize,
    pub skipped: Vec<SkippedEntry>,
    /// 集計後のリスト
    pub list: ShoppingList,
    /// ファイルに書き出したか
    pub saved: bool,
}

/// 1ページ分の抽出結果を作成（材料グループが無ければ None）
pub fn recipe_from_page(location: &str, html: &str, extractor: &Extractor) -> Option<RecipeResult> {
    let groups = extractor.extract(html);
    if groups.is_empty() {
        return None;
    }

    Some(RecipeResult {
        source_location: location.to_string(),
        ingredients: groups,
    })
}

/// 全ソースを順番に取得して抽出
pub async fn collect_recipes(
    sources: &[String],
    fetcher: &PageFetcher,
    extractor: &Extractor,
    progress: &ProgressBar,
) -> Result<Vec<RecipeResult>> {
    let mut recipes = Vec::new();

    for (idx, url) in sources.iter().enumerate() {
        progress.set_message(format!("[{}/{}] {}", idx + 1, sources.len(), url));

        let html = fetcher.fetch(url).await?;
        match recipe_from_page(url, &html, extractor) {
            Some(recipe) => {
                debug!(url, groups = recipe.ingredients.len(), "材料を抽出");
                recipes.push(recipe);
            }
            None => info!(url, "材料が見つかりませんでした"),
        }

        progress.inc(1);
    }

    Ok(recipes)
}

/// 一括処理を実行
///
/// 取得が終わった時点で進捗表示を消し、以降の診断ログと混ざらないようにする。
pub async fn run(
    sources: &[String],
    store: &ShoppingListStore,
    config: &Config,
    options: &RunOptions,
    progress: &ProgressBar,
) -> Result<RunSummary> {
    let extractor = Extractor::new(&config.signatures)?;
    let fetcher = PageFetcher::from_config(config)?;

    // 取得前に読み込み、破損していれば何もせず中断
    let prior = store.load()?;

    let recipes = collect_recipes(sources, &fetcher, &extractor, progress).await?;
    progress.finish_and_clear();

    let aggregation = aggregate(prior, &recipes);

    if !options.dry_run {
        store.save(&aggregation.list)?;
    }

    Ok(RunSummary {
        sources: sources.len(),
        recipes,
        added: aggregation.added,
        skipped: aggregation.skipped,
        list: aggregation.list,
        saved: !options.dry_run,
    })
}
