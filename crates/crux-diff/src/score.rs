//! Aggregate scoring: mean over atoms of severityWeight × mean(epistemic
//! triple), zero exactly when no atoms exist.

use crux_core::config::SeverityWeights;
use crux_core::models::{DisagreementAtom, Severity};

pub fn severity_weight(severity: Severity, weights: &SeverityWeights) -> f64 {
    match severity {
        Severity::High => weights.high,
        Severity::Medium => weights.medium,
        Severity::Low => weights.low,
    }
}

/// Fold the atom list into one bounded score.
pub fn aggregate(atoms: &[DisagreementAtom], weights: &SeverityWeights) -> f64 {
    if atoms.is_empty() {
        return 0.0;
    }
    let sum: f64 = atoms
        .iter()
        .map(|a| severity_weight(a.severity, weights) * a.weight.mean())
        .sum();
    (sum / atoms.len() as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crux_core::models::{AtomKind, EpistemicWeight};

    fn atom(severity: Severity, triple: f64) -> DisagreementAtom {
        DisagreementAtom {
            kind: AtomKind::EdgePresence,
            severity,
            left_value: String::new(),
            right_value: String::new(),
            edge: None,
            variable: None,
            reason: String::new(),
            weight: EpistemicWeight {
                data_grounded: triple,
                mechanism_grounded: triple,
                assumption_grounded: triple,
            },
        }
    }

    #[test]
    fn empty_atoms_score_zero() {
        assert_eq!(aggregate(&[], &SeverityWeights::default()), 0.0);
    }

    #[test]
    fn high_severity_counts_full_weight() {
        let score = aggregate(&[atom(Severity::High, 0.5)], &SeverityWeights::default());
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn medium_is_discounted() {
        let score = aggregate(&[atom(Severity::Medium, 0.5)], &SeverityWeights::default());
        assert!((score - 0.3).abs() < 1e-9);
    }
}
