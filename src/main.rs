use chrono::Local;
use clap::Parser;
use food_cli::api::UsdaClient;
use food_cli::cli::{Cli, Commands};
use food_cli::config::Config;
use food_cli::error::Result;
use food_cli::journal::{FoodLog, LogEntry};
use food_cli::{extract, scale};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Search { query, count } => {
            let client = UsdaClient::new(&config)?;

            if cli.verbose {
                println!("検索クエリ: {} (最大{}件)", query, count);
            }

            let results = client.search_food(&query, count).await?;

            if results.foods.is_empty() {
                println!("該当する食品が見つかりません");
                return Ok(());
            }

            println!("検索結果: '{}'\n", query);
            println!("{:<10} {:<45} {:<25} {:>8}", "ID", "食品", "ブランド", "kcal");

            for food in &results.foods {
                let calories = food
                    .approximate_calories()
                    .map(|c| format!("{:.0}", c))
                    .unwrap_or_else(|| "N/A".to_string());

                println!(
                    "{:<10} {:<45} {:<25} {:>8}",
                    food.fdc_id,
                    food.description(),
                    food.brand(),
                    calories
                );
            }

            println!("\n`food log <ID>` で記録できます");
        }

        Commands::Log { fdc_id, servings } => {
            let client = UsdaClient::new(&config)?;
            let log = FoodLog::default_location()?;

            log_food(&client, &log, fdc_id, servings, cli.verbose).await?;
        }

        Commands::Today => {
            let log = FoodLog::default_location()?;

            if cli.verbose {
                println!("記録ファイル: {}", log.path().display());
            }

            if !log.path().exists() {
                println!("記録はまだありません");
                return Ok(());
            }

            let today = Local::now().date_naive();
            let (entries, totals) = log.entries_for_date(today)?;

            if entries.is_empty() {
                println!("今日の記録はありません");
                return Ok(());
            }

            println!("今日の食品記録 - {}\n", today);
            println!(
                "{:<7} {:<40} {:<12} {:>8} {:>8} {:>8} {:>8}",
                "時刻", "食品", "サービング", "kcal", "P(g)", "C(g)", "F(g)"
            );

            for entry in &entries {
                println!(
                    "{:<7} {:<40} {:<12} {:>8.0} {:>8.1} {:>8.1} {:>8.1}",
                    entry.time_of_day(),
                    entry.food,
                    entry.serving,
                    entry.calories,
                    entry.protein_g,
                    entry.carbs_g,
                    entry.fat_g
                );
            }

            println!(
                "{:<7} {:<40} {:<12} {:>8.0} {:>8.1} {:>8.1} {:>8.1}",
                "", "合計", "", totals.calories, totals.protein_g, totals.carbs_g, totals.fat_g
            );
        }

        Commands::Quick { query, servings } => {
            let client = UsdaClient::new(&config)?;
            let log = FoodLog::default_location()?;

            // 検索して先頭の1件を採用
            let results = client.search_food(&query, 1).await?;

            let Some(found) = results.foods.first() else {
                println!("該当する食品が見つかりません");
                return Ok(());
            };

            println!("見つかりました: {}", found.description());

            log_food(&client, &log, found.fdc_id, servings, cli.verbose).await?;
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  APIベースURL: {}", config.base_url);
                println!("  検索件数: {}", config.default_page_size);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  APIキー: {}",
                    if config.api_key.is_some() { "設定済み" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}

/// 詳細を取得して抽出→換算→追記し、確認を表示する
async fn log_food(
    client: &UsdaClient,
    log: &FoodLog,
    fdc_id: u64,
    servings: f64,
    verbose: bool,
) -> Result<()> {
    let food = client.get_food_details(fdc_id).await?;

    let summary = extract(&food.readings());
    let (scaled, serving_text) = scale(
        &summary,
        food.serving_size(),
        food.serving_unit(),
        servings,
    );

    let entry = LogEntry::now(food.description(), &serving_text, &scaled);
    log.append(&entry)?;

    if verbose {
        println!("記録先: {}", log.path().display());
    }

    println!("✔ 記録しました: {}", food.description());
    println!("  サービング: {}", serving_text);
    println!("  カロリー: {:.0} kcal", scaled.calories);
    println!(
        "  たんぱく質: {:.1}g | 炭水化物: {:.1}g | 脂質: {:.1}g",
        scaled.protein_g, scaled.carbs_g, scaled.fat_g
    );

    Ok(())
}
