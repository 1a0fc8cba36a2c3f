//! Evidence-weight derivation from the validation-metadata blob.

use crux_core::config::defaults::{DEFAULT_EVIDENCE_WEIGHT, EVIDENCE_WEIGHT_FLOOR};

/// Derive the evidence-weight scalar from a model's validation metadata.
///
/// Top-level numeric fields may arrive in [0, 100] or [0, 1]; values above 1
/// are divided by 100 first. The weight is the mean of the usable fields,
/// defaulting to 0.55 when none exist, clamped to [0.05, 1.0] so every atom
/// derived from it contributes a strictly positive score term.
pub fn evidence_weight(metadata: Option<&serde_json::Value>) -> f64 {
    let fields: Vec<f64> = metadata
        .and_then(|v| v.as_object())
        .map(|map| {
            map.values()
                .filter_map(|v| v.as_f64())
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| if v > 1.0 { v / 100.0 } else { v })
                .filter(|v| *v <= 1.0)
                .collect()
        })
        .unwrap_or_default();

    if fields.is_empty() {
        return DEFAULT_EVIDENCE_WEIGHT;
    }
    let mean = fields.iter().sum::<f64>() / fields.len() as f64;
    mean.clamp(EVIDENCE_WEIGHT_FLOOR, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_metadata_defaults() {
        assert_eq!(evidence_weight(None), 0.55);
        assert_eq!(evidence_weight(Some(&json!({}))), 0.55);
        assert_eq!(evidence_weight(Some(&json!({"notes": "text only"}))), 0.55);
    }

    #[test]
    fn percent_scale_is_normalized() {
        let w = evidence_weight(Some(&json!({"fit": 80, "coverage": 0.6})));
        assert!((w - 0.7).abs() < 1e-9);
    }

    #[test]
    fn weight_is_floored() {
        let w = evidence_weight(Some(&json!({"fit": 0.0})));
        assert_eq!(w, 0.05);
    }
}
