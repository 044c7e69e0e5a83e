//! 記録ストアテスト
//!
//! JSONL記録の追記・読み込み・日次集計を検証

use chrono::NaiveDate;
use food_cli::error::FoodCliError;
use food_cli::journal::{FoodLog, LogEntry};
use food_cli::nutrition::NutritionSummary;
use tempfile::tempdir;

fn entry_at(timestamp: &str, food: &str, calories: f64) -> LogEntry {
    LogEntry {
        timestamp: timestamp.to_string(),
        food: food.to_string(),
        serving: "100.0 g".to_string(),
        calories,
        protein_g: 1.0,
        carbs_g: 2.0,
        fat_g: 3.0,
    }
}

/// ファイル未作成のread_allは空
#[test]
fn test_read_all_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let log = FoodLog::new(dir.path());

    let entries = log.read_all().expect("読み込み失敗");
    assert!(entries.is_empty());
}

/// 追記→全件読み込みのラウンドトリップ
#[test]
fn test_append_then_read_all() {
    let dir = tempdir().expect("Failed to create temp dir");
    let log = FoodLog::new(dir.path());

    let summary = NutritionSummary {
        calories: 143.0,
        protein_g: 12.4,
        carbs_g: 0.96,
        fat_g: 9.96,
    };
    let entry = LogEntry::now("Egg, whole, raw", "50.3 g", &summary);

    log.append(&entry).expect("追記失敗");

    let entries = log.read_all().expect("読み込み失敗");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries.last(), Some(&entry));
}

/// 追記順が読み込み順に保持される
#[test]
fn test_append_preserves_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let log = FoodLog::new(dir.path());

    for food in ["first", "second", "third"] {
        log.append(&entry_at("2024-05-01T08:00:00", food, 100.0))
            .expect("追記失敗");
    }

    let entries = log.read_all().expect("読み込み失敗");
    let foods: Vec<&str> = entries.iter().map(|e| e.food.as_str()).collect();
    assert_eq!(foods, vec!["first", "second", "third"]);
}

/// 保存ディレクトリは初回追記時に作成される
#[test]
fn test_append_creates_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let log = FoodLog::new(&dir.path().join("nested").join("food-cli"));

    log.append(&entry_at("2024-05-01T12:00:00", "banana", 89.0))
        .expect("追記失敗");

    assert!(log.path().exists());
    assert_eq!(log.read_all().expect("読み込み失敗").len(), 1);
}

/// 記録行のフィールド名は固定（後方互換の保存フォーマット）
#[test]
fn test_log_line_format_is_stable() {
    let dir = tempdir().expect("Failed to create temp dir");
    let log = FoodLog::new(dir.path());

    log.append(&entry_at("2024-05-01T12:00:00.123456", "banana", 89.0))
        .expect("追記失敗");

    let content = std::fs::read_to_string(log.path()).expect("ファイル読み込み失敗");
    let line = content.lines().next().expect("行がない");

    for key in [
        "\"timestamp\"",
        "\"food\"",
        "\"serving\"",
        "\"calories\"",
        "\"protein_g\"",
        "\"carbs_g\"",
        "\"fat_g\"",
    ] {
        assert!(line.contains(key), "キーが見つからない: {}", key);
    }
}

/// 空の記録に対する日次集計
#[test]
fn test_entries_for_date_empty_log() {
    let dir = tempdir().expect("Failed to create temp dir");
    let log = FoodLog::new(dir.path());

    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let (entries, totals) = log.entries_for_date(date).expect("集計失敗");

    assert!(entries.is_empty());
    assert_eq!(totals, NutritionSummary::default());
}

/// 日付プレフィックスで絞り込み、合計を算出する
#[test]
fn test_entries_for_date_filters_and_totals() {
    let dir = tempdir().expect("Failed to create temp dir");
    let log = FoodLog::new(dir.path());

    log.append(&entry_at("2024-05-01T08:00:00.000001", "oatmeal", 200.0))
        .expect("追記失敗");
    log.append(&entry_at("2024-05-01T12:30:00.000001", "sandwich", 300.0))
        .expect("追記失敗");
    log.append(&entry_at("2024-05-02T08:00:00.000001", "banana", 89.0))
        .expect("追記失敗");

    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let (entries, totals) = log.entries_for_date(date).expect("集計失敗");

    // 同日の2件のみ、追記順のまま
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].food, "oatmeal");
    assert_eq!(entries[1].food, "sandwich");

    assert_eq!(totals.calories, 500.0);
    assert_eq!(totals.protein_g, 2.0);
    assert_eq!(totals.carbs_g, 4.0);
    assert_eq!(totals.fat_g, 6.0);
}

/// 別日の記録しかない日は空
#[test]
fn test_entries_for_date_no_match() {
    let dir = tempdir().expect("Failed to create temp dir");
    let log = FoodLog::new(dir.path());

    log.append(&entry_at("2024-05-01T08:00:00", "oatmeal", 200.0))
        .expect("追記失敗");

    let date = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
    let (entries, totals) = log.entries_for_date(date).expect("集計失敗");

    assert!(entries.is_empty());
    assert_eq!(totals.calories, 0.0);
}

/// 不正な行は読み込み全体を中断する
#[test]
fn test_malformed_line_aborts_read() {
    let dir = tempdir().expect("Failed to create temp dir");
    let log = FoodLog::new(dir.path());

    log.append(&entry_at("2024-05-01T08:00:00", "oatmeal", 200.0))
        .expect("追記失敗");

    // 手で壊れた行を足す
    use std::io::Write;
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(log.path())
        .expect("ファイルオープン失敗");
    writeln!(file, "not json at all").expect("書き込み失敗");

    let result = log.read_all();
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, FoodCliError::LogParse(_)));
    // 行番号入りのメッセージ
    assert!(format!("{}", err).contains("2行目"));
}

/// タイムスタンプからの時刻表示（HH:MM）
#[test]
fn test_time_of_day() {
    let entry = entry_at("2024-05-01T08:35:12.123456", "oatmeal", 200.0);
    assert_eq!(entry.time_of_day(), "08:35");
}
