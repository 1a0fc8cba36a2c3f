//! Humanized display labels: snake/camel case to Title Case, preserving
//! short all-caps acronyms.

/// Longest run of uppercase letters still treated as an acronym.
const MAX_ACRONYM_LEN: usize = 4;

pub fn humanize(raw: &str) -> String {
    split_words(raw)
        .iter()
        .map(|word| {
            if is_acronym(word) {
                word.clone()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_words(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if ch.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            // Break on lower→Upper, and at the end of an acronym run (HTTPServer).
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn is_acronym(word: &str) -> bool {
    word.len() <= MAX_ACRONYM_LEN
        && word.chars().any(|c| c.is_uppercase())
        && word.chars().all(|c| c.is_uppercase() || c.is_numeric())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::humanize;

    #[test]
    fn snake_case_becomes_title_case() {
        assert_eq!(humanize("blood_pressure"), "Blood Pressure");
    }

    #[test]
    fn camel_case_becomes_title_case() {
        assert_eq!(humanize("bloodPressure"), "Blood Pressure");
        assert_eq!(humanize("LungCancerRisk"), "Lung Cancer Risk");
    }

    #[test]
    fn short_acronyms_are_preserved() {
        assert_eq!(humanize("LDL_cholesterol"), "LDL Cholesterol");
        assert_eq!(humanize("HTTPServer_load"), "HTTP Server Load");
    }
}
