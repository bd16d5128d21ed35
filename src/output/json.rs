//! JSON output renderer.
//!
//! Outputs one line with keys in sorted order: `{"expression": {...},
//! "result": {...}, "status": "ok"}` or `{"error": {"kind": ..., "message": ...},
//! "status": "error"}`.

use crate::output::{OutputRenderer, Outcome};

/// JSON output renderer.
pub struct JsonRenderer {
    /// Decimal places used for the `display` field of real results.
    pub decimal_places: u8,
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, outcome: &Outcome) -> String {
        let output = match outcome {
            Ok(eval) => {
                let mut result = serde_json::to_value(eval.value).unwrap_or_default();
                result["display"] = serde_json::Value::String(format!(
                    "{:.*}",
                    self.decimal_places as usize, eval.value
                ));
                serde_json::json!({
                    "status": "ok",
                    "expression": eval.expression,
                    "result": result,
                })
            }
            Err(err) => serde_json::json!({
                "status": "error",
                "error": {
                    "kind": err.kind(),
                    "message": err.detail(),
                },
            }),
        };

        serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
