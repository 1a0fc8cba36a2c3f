//! Deterministic one-line report summary.

use crux_core::models::{AtomKind, DisagreementAtom, Severity};

const KIND_ORDER: [AtomKind; 7] = [
    AtomKind::Assumption,
    AtomKind::Confounder,
    AtomKind::EdgePresence,
    AtomKind::EdgeSign,
    AtomKind::EdgeDirection,
    AtomKind::Intervention,
    AtomKind::Counterfactual,
];

/// Render the summary line. Counts follow the fixed kind order so identical
/// inputs always produce byte-identical text.
pub fn render(atoms: &[DisagreementAtom], coverage: f64) -> String {
    if atoms.is_empty() {
        return format!(
            "No disagreements detected (alignment coverage {coverage:.2})."
        );
    }

    let high = atoms.iter().filter(|a| a.severity == Severity::High).count();
    let medium = atoms
        .iter()
        .filter(|a| a.severity == Severity::Medium)
        .count();
    let low = atoms.iter().filter(|a| a.severity == Severity::Low).count();

    let mut severities = Vec::new();
    if high > 0 {
        severities.push(format!("{high} high"));
    }
    if medium > 0 {
        severities.push(format!("{medium} medium"));
    }
    if low > 0 {
        severities.push(format!("{low} low"));
    }

    let kinds: Vec<String> = KIND_ORDER
        .iter()
        .filter_map(|kind| {
            let count = atoms.iter().filter(|a| a.kind == *kind).count();
            (count > 0).then(|| format!("{count} {}", kind.as_str()))
        })
        .collect();

    format!(
        "{} disagreement{} ({}): {} (alignment coverage {coverage:.2}).",
        atoms.len(),
        if atoms.len() == 1 { "" } else { "s" },
        severities.join(", "),
        kinds.join(", ")
    )
}
