use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use recipe_cart::{cli, config, error, pipeline, store};
use cli::Cli;
use config::Config;
use error::Result;
use store::ShoppingListStore;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let sources = Config::sources();
    let store = ShoppingListStore::new(Config::store_path());

    println!("🛒 recipe-cart - 買い物リスト集計\n");

    let progress = ProgressBar::new(sources.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.enable_steady_tick(Duration::from_millis(120));

    let options = pipeline::RunOptions { dry_run: cli.dry_run };
    let result = pipeline::run(&sources, &store, &config, &options, &progress).await;
    progress.finish_and_clear();
    let summary = result?;

    println!("✔ {}件中{}件のレシピから材料を抽出", summary.sources, summary.recipes.len());
    println!("✔ {}件を加算、{}件をスキップ", summary.added, summary.skipped.len());
    for skipped in &summary.skipped {
        println!("  - {}", skipped);
    }

    if summary.saved {
        println!(
            "✔ 買い物リストを保存: {} ({}品目)",
            store.path().display(),
            summary.list.len()
        );
    } else {
        println!("買い物リスト（未保存）:");
        for (name, total) in summary.list.iter() {
            println!("  {}: {}", name, total);
        }
    }

    println!("\n✅ 完了");
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "recipe_cart={0},recipe_cart_common={0}",
            default_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
