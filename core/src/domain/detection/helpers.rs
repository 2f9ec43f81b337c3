use std::sync::LazyLock;

use regex::Regex;

// Teachable-machine style label files prefix each line with its index
// ("3 Tomato_Late_blight"). Strip that before splitting.
static INDEX_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*").expect("index prefix regex"));

/// Index of the highest score; ties resolve to the lowest index.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

/// Removes a leading numeric index (digits plus optional whitespace) that the
/// label source may embed.
pub fn clean_label(label: &str) -> String {
    INDEX_PREFIX.replace(label, "").into_owned()
}

/// Splits a cleaned label on the first underscore into (crop, disease name).
/// Without an underscore the whole label is the disease name and the crop is
/// empty.
pub fn split_label(label: &str) -> (String, String) {
    match label.split_once('_') {
        Some((crop, disease)) => (crop.to_string(), disease.to_string()),
        None => (String::new(), label.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_picks_highest_score() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
    }

    #[test]
    fn argmax_tie_resolves_to_lowest_index() {
        assert_eq!(argmax(&[0.4, 0.4, 0.2]), Some(0));
        assert_eq!(argmax(&[0.1, 0.4, 0.4]), Some(1));
    }

    #[test]
    fn argmax_of_empty_is_none() {
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn clean_label_strips_numeric_prefix() {
        assert_eq!(clean_label("3 Tomato_Late_blight"), "Tomato_Late_blight");
        assert_eq!(clean_label("12Tomato_healthy"), "Tomato_healthy");
        assert_eq!(clean_label("Potato_Early_blight"), "Potato_Early_blight");
    }

    #[test]
    fn split_label_takes_first_underscore_only() {
        assert_eq!(
            split_label("Tomato_Late_blight"),
            ("Tomato".to_string(), "Late_blight".to_string())
        );
    }

    #[test]
    fn split_label_without_underscore_has_empty_crop() {
        assert_eq!(
            split_label("Unknown"),
            (String::new(), "Unknown".to_string())
        );
    }
}
