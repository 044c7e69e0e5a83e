//! 食品記録ストア（JSONL）
//!
//! 1行1レコードの追記専用ファイル。既存行の書き換え・削除は行わない。
//! 保存先ディレクトリは構築時に明示的に渡す（テストでは一時ディレクトリへ
//! 差し替える）。行のフォーマットは互換性のため固定。

use crate::error::{FoodCliError, Result};
use crate::nutrition::NutritionSummary;
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

const LOG_FILE_NAME: &str = "food_log.jsonl";

/// 記録1件（書き込み後は不変）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// ローカル時刻のISO-8601文字列（タイムゾーン変換なし）
    pub timestamp: String,
    pub food: String,
    /// 表示用サービング表記（例: "150.0 g"）
    pub serving: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl LogEntry {
    /// 現在のローカル時刻で記録を作成
    pub fn now(food: &str, serving: &str, summary: &NutritionSummary) -> Self {
        let timestamp = Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string();

        Self {
            timestamp,
            food: food.to_string(),
            serving: serving.to_string(),
            calories: summary.calories,
            protein_g: summary.protein_g,
            carbs_g: summary.carbs_g,
            fat_g: summary.fat_g,
        }
    }

    pub fn summary(&self) -> NutritionSummary {
        NutritionSummary {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }

    /// 表示用の時刻（HH:MM）
    pub fn time_of_day(&self) -> String {
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|_| self.timestamp.get(11..16).unwrap_or("").to_string())
    }
}

/// 追記専用の食品記録ファイル
pub struct FoodLog {
    path: PathBuf,
}

impl FoodLog {
    /// 指定ディレクトリ直下のfood_log.jsonlを使う
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(LOG_FILE_NAME),
        }
    }

    /// 既定の保存先（~/.local/share/food-cli 相当）
    pub fn default_location() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| FoodCliError::Config("データディレクトリが見つかりません".into()))?;
        Ok(Self::new(&data_dir.join("food-cli")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 1件追記する
    ///
    /// ファイルとディレクトリは初回追記時に作成。
    pub fn append(&self, entry: &LogEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let line = serde_json::to_string(entry)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// 全件を記録順に読み込む
    ///
    /// ファイル未作成は空。不正な行があった場合はその行番号を添えて
    /// 読み込み全体を中断する（スキップはしない）。
    pub fn read_all(&self) -> Result<Vec<LogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = std::fs::File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let entry: LogEntry = serde_json::from_str(&line).map_err(|e| {
                FoodCliError::LogParse(format!("{}行目: {}", index + 1, e))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// 指定日の記録と合計を返す
    ///
    /// タイムスタンプ文字列の日付プレフィックス一致で絞り込む
    /// （保存時のローカル時刻をそのまま比較）。順序は記録順を維持。
    pub fn entries_for_date(&self, date: NaiveDate) -> Result<(Vec<LogEntry>, NutritionSummary)> {
        let prefix = date.format("%Y-%m-%d").to_string();

        let entries: Vec<LogEntry> = self
            .read_all()?
            .into_iter()
            .filter(|e| e.timestamp.starts_with(&prefix))
            .collect();

        let mut totals = NutritionSummary::default();
        for entry in &entries {
            totals.add(&entry.summary());
        }

        Ok((entries, totals))
    }
}
