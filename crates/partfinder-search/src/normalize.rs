//! Query normalization for punctuation- and spacing-insensitive comparison.

/// Lowercases `text` and keeps only ASCII letters and digits.
///
/// `"roboRIO 2.0"` and `"robo rio 2.0"` both become `"roborio20"`. Non-ASCII
/// letters are dropped, so `"Deküp"` becomes `"dekp"`.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_spaces_and_punctuation() {
        assert_eq!(normalize("robo rio 2.0"), "roborio20");
        assert_eq!(normalize("roboRIO 2.0"), "roborio20");
        assert_eq!(normalize("Kraken X60!"), "krakenx60");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(normalize("Deküp"), "dekp");
        assert_eq!(normalize("ÇIM motor"), "immotor");
    }

    #[test]
    fn punctuation_only_becomes_empty() {
        assert_eq!(normalize("  -- ?!"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn is_idempotent() {
        for s in [
            "NEO 550",
            "robo rio 2.0",
            "Swerve & Steer Module",
            "4\" Mecanum Wheel Set",
            "ıİß straße",
            "",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
