//! USDA APIレスポンス型
//!
//! 検索レスポンスと詳細レスポンスでは栄養素のスキーマが異なる
//! （検索はフラット、詳細はnutrientサブオブジェクトにネスト）。
//! どちらも`readings()`で統一ビュー`NutrientReading`へ変換してから
//! 抽出処理(`nutrition::extract`)へ渡す。

use crate::nutrition::NutrientReading;
use serde::Deserialize;

/// /foods/search レスポンス全体
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// ヒットした食品（0件は正常な空結果）
    #[serde(default)]
    pub foods: Vec<FoodSearchResult>,
}

/// 検索結果1件
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSearchResult {
    pub fdc_id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub brand_owner: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<SearchFoodNutrient>,
}

/// 検索レスポンスの栄養素（フラット形式）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFoodNutrient {
    #[serde(default)]
    pub nutrient_name: Option<String>,
    #[serde(default)]
    pub unit_name: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
}

impl FoodSearchResult {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("Unknown")
    }

    /// ブランド名（brandName優先、なければbrandOwner）
    pub fn brand(&self) -> &str {
        self.brand_name
            .as_deref()
            .or(self.brand_owner.as_deref())
            .unwrap_or("")
    }

    /// 検索結果に含まれる概算カロリー（"Energy"の先頭マッチ）
    pub fn approximate_calories(&self) -> Option<f64> {
        self.food_nutrients
            .iter()
            .find(|n| n.nutrient_name.as_deref() == Some("Energy"))
            .map(|n| n.value.unwrap_or(0.0))
    }

    pub fn readings(&self) -> Vec<NutrientReading> {
        self.food_nutrients
            .iter()
            .map(|n| NutrientReading {
                name: n.nutrient_name.clone().unwrap_or_default(),
                unit: n.unit_name.clone().unwrap_or_default(),
                amount: n.value.unwrap_or(0.0),
            })
            .collect()
    }
}

/// /food/{fdcId} レスポンス（詳細）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetail {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub serving_size: Option<f64>,
    #[serde(default)]
    pub serving_unit: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<DetailFoodNutrient>,
}

/// 詳細レスポンスの栄養素（name/unitはnutrientサブオブジェクト）
#[derive(Debug, Clone, Deserialize)]
pub struct DetailFoodNutrient {
    #[serde(default)]
    pub nutrient: Option<NutrientInfo>,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NutrientInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "unitName", default)]
    pub unit_name: Option<String>,
}

impl FoodDetail {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("Unknown food")
    }

    /// サービングサイズ（未指定は100）
    pub fn serving_size(&self) -> f64 {
        self.serving_size.unwrap_or(100.0)
    }

    /// サービング単位（未指定は"g"）
    pub fn serving_unit(&self) -> &str {
        self.serving_unit.as_deref().unwrap_or("g")
    }

    pub fn readings(&self) -> Vec<NutrientReading> {
        self.food_nutrients
            .iter()
            .map(|n| NutrientReading {
                name: n
                    .nutrient
                    .as_ref()
                    .and_then(|i| i.name.clone())
                    .unwrap_or_default(),
                unit: n
                    .nutrient
                    .as_ref()
                    .and_then(|i| i.unit_name.clone())
                    .unwrap_or_default(),
                amount: n.amount.unwrap_or(0.0),
            })
            .collect()
    }
}
