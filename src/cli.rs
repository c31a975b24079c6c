use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-cart")]
#[command(about = "レシピページの材料を買い物リストに集計するツール", long_about = None)]
pub struct Cli {
    /// 設定ファイル（デフォルト: ~/.config/recipe-cart/config.json）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 集計結果を表示するだけで保存しない
    #[arg(long)]
    pub dry_run: bool,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}
