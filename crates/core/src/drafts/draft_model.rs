//! Lenient DTOs for the analysis collaborator's raw estimate JSON.
//!
//! Everything here is untrusted: fields may be missing, numbers may arrive
//! as strings, and whole sections may be absent. Each field deserializes
//! best-effort; repair happens in the normalizer, never at parse time, so a
//! malformed field can never fail a whole document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw per-document estimate as returned by the analysis collaborator.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftEstimate {
    pub project_name: Option<String>,
    pub currency: Option<String>,
    pub market_region: Option<String>,
    pub breakdown: Option<Vec<DraftLineItem>>,
    pub category_trends: Option<Vec<DraftTrend>>,
    /// Collaborator-supplied project total. Parsed for completeness but
    /// never trusted; the normalizer always recomputes it.
    #[serde(deserialize_with = "lenient_f64")]
    pub total_budget: Option<f64>,
}

/// Raw line item. All numeric fields tolerate numbers, numeric strings, or
/// null.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftLineItem {
    pub category: Option<String>,
    pub material: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub unit_price: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_price: Option<f64>,
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub secondary_quantity: Option<f64>,
    pub secondary_unit: Option<String>,
}

/// Raw category trend object.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftTrend {
    pub category: Option<String>,
    pub trend: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub percentage_change: Option<f64>,
    #[serde(deserialize_with = "lenient_values")]
    pub price_history: Vec<f64>,
}

/// Accepts a JSON number, a numeric string, or null; anything else (or a
/// non-finite value) becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_f64))
}

/// Accepts an array of loosely-typed values, keeping only the entries that
/// coerce to finite numbers.
fn lenient_values<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values.iter().filter_map(coerce_f64).collect())
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|parsed| parsed.is_finite()),
        Value::String(raw) => raw.trim().parse::<f64>().ok().filter(|parsed| parsed.is_finite()),
        _ => None,
    }
}
