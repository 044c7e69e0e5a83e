//! 栄養素の抽出とサービング換算
//!
//! APIレスポンス形式の差異は`api::types`側で吸収済みで、
//! ここでは統一ビュー`NutrientReading`の列だけを扱う。

use serde::{Deserialize, Serialize};

/// 栄養素1件の統一ビュー（名前・単位・量）
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientReading {
    pub name: String,
    pub unit: String,
    pub amount: f64,
}

/// 4項目の栄養サマリ（未検出は0.0）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl NutritionSummary {
    pub fn add(&mut self, other: &NutritionSummary) {
        self.calories += other.calories;
        self.protein_g += other.protein_g;
        self.carbs_g += other.carbs_g;
        self.fat_g += other.fat_g;
    }
}

/// 追跡対象4項目を抽出する
///
/// 各項目とも、列の先頭から最初にルールへ一致した1件の量を採用する
/// （2件目以降の一致は無視）。
///
/// - カロリー: 名前に"Energy"を含み、かつ単位に"kcal"を含む
///   （大文字小文字を区別。kJの"Energy"は一致しない）
/// - たんぱく質: 名前が"Protein"
/// - 炭水化物: 名前が"Carbohydrate, by difference"
/// - 脂質: 名前が"Total lipid (fat)"
pub fn extract(readings: &[NutrientReading]) -> NutritionSummary {
    let mut calories: Option<f64> = None;
    let mut protein: Option<f64> = None;
    let mut carbs: Option<f64> = None;
    let mut fat: Option<f64> = None;

    for reading in readings {
        if calories.is_none()
            && reading.name.contains("Energy")
            && reading.unit.contains("kcal")
        {
            calories = Some(reading.amount);
        } else if protein.is_none() && reading.name == "Protein" {
            protein = Some(reading.amount);
        } else if carbs.is_none() && reading.name == "Carbohydrate, by difference" {
            carbs = Some(reading.amount);
        } else if fat.is_none() && reading.name == "Total lipid (fat)" {
            fat = Some(reading.amount);
        }
    }

    NutritionSummary {
        calories: calories.unwrap_or(0.0),
        protein_g: protein.unwrap_or(0.0),
        carbs_g: carbs.unwrap_or(0.0),
        fat_g: fat.unwrap_or(0.0),
    }
}

/// サービング数で換算し、表示用のサービング表記を組み立てる
///
/// 例: serving_size=100, unit="g", servings=1.5 → "150.0 g"
///
/// servingsの検証は行わない（負数を渡せば負の結果になる。
/// CLI側で弾く前提の現行仕様）。
pub fn scale(
    summary: &NutritionSummary,
    serving_size: f64,
    serving_unit: &str,
    servings: f64,
) -> (NutritionSummary, String) {
    let scaled = NutritionSummary {
        calories: summary.calories * servings,
        protein_g: summary.protein_g * servings,
        carbs_g: summary.carbs_g * servings,
        fat_g: summary.fat_g * servings,
    };

    let serving_text = format!("{:.1} {}", serving_size * servings, serving_unit);

    (scaled, serving_text)
}
