use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ReformError;

/// One cell of the 40-cell board. Only the fields the reform pipeline touches
/// are modeled; everything else (name, rent schedule, ...) rides along in
/// `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
  #[serde(rename = "type")]
  pub kind: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub cost: Option<Value>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub color: Option<String>,

  // input-only, stripped before output
  #[serde(skip_serializing_if = "Option::is_none")]
  pub group: Option<Value>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub position: Option<usize>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub mortgage: Option<f64>,

  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Tile {
  pub fn is_buyable(&self) -> bool {
    matches!(self.kind.as_str(), "property" | "utility" | "railroad")
  }

  /// Purchase price as an integer. The raw dataset stores costs both as bare
  /// numbers and as numeric strings; fractional values truncate toward zero.
  pub fn cost_value(&self) -> Result<i64, ReformError> {
    let raw = self.cost.as_ref().ok_or_else(|| ReformError::MissingCost {
      kind: self.kind.clone(),
      position: self.position,
    })?;
    match raw {
      Value::Number(n) => {
        if let Some(i) = n.as_i64() {
          Ok(i)
        } else if let Some(f) = n.as_f64() {
          Ok(f.trunc() as i64)
        } else {
          Err(ReformError::BadCost { raw: raw.to_string() })
        }
      }
      Value::String(s) => {
        let s = s.trim();
        s.parse::<i64>()
          .or_else(|_| s.parse::<f64>().map(|f| f.trunc() as i64))
          .map_err(|_| ReformError::BadCost { raw: raw.to_string() })
      }
      _ => Err(ReformError::BadCost { raw: raw.to_string() }),
    }
  }
}
