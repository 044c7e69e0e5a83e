//! food-cli
//!
//! USDA FoodData Centralを検索し、日々の食事をローカルのJSONLへ記録するCLI

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod journal;
pub mod nutrition;

pub use config::Config;
pub use error::{FoodCliError, Result};
pub use journal::{FoodLog, LogEntry};
pub use nutrition::{extract, scale, NutrientReading, NutritionSummary};
