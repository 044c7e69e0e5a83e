use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "food")]
#[command(about = "USDA FoodData Central 食品検索・カロリー記録ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// USDAデータベースから食品を検索
    Search {
        /// 検索する食品名（例: "banana", "cheddar cheese"）
        #[arg(required = true)]
        query: String,

        /// 表示する件数
        #[arg(short = 'n', long, default_value = "10")]
        count: u32,
    },

    /// FDC IDを指定して食品を記録
    Log {
        /// 検索結果のFDC ID
        #[arg(required = true)]
        fdc_id: u64,

        /// 食べた量（サービング数）
        #[arg(short, long, default_value = "1.0")]
        servings: f64,
    },

    /// 今日の記録と合計を表示
    Today,

    /// 検索して先頭の結果をそのまま記録
    Quick {
        /// 食品の説明（例: "scrambled eggs"）
        #[arg(required = true)]
        query: String,

        /// 食べた量（サービング数）
        #[arg(short, long, default_value = "1.0")]
        servings: f64,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
