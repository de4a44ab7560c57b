//! Character-whitelist sanitization for scraped text
//!
//! Every field pulled out of the move table passes through [`clean`]
//! before it reaches storage.

/// Punctuation allowed through in addition to alphanumerics and whitespace.
const ALLOWED_PUNCT: [char; 3] = ['.', '(', ')'];

/// Strip every character outside the whitelist, then trim.
///
/// The whitelist is alphanumerics, whitespace, `.`, `(` and `)`.
/// Filtering runs before the trim so punctuation sitting at either end
/// cannot leave stray whitespace behind.
pub fn clean(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || ALLOWED_PUNCT.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn allowed(c: char) -> bool {
        c.is_alphanumeric() || c.is_whitespace() || ALLOWED_PUNCT.contains(&c)
    }

    #[test]
    fn test_trims_and_strips_punctuation() {
        assert_eq!(clean(" Fire Spin! "), "Fire Spin");
        assert_eq!(clean("Mud-Slap"), "MudSlap");
        assert_eq!(clean("Hidden Power (Fire)"), "Hidden Power (Fire)");
    }

    #[test]
    fn test_keeps_numeric_text_intact() {
        assert_eq!(clean("10.00"), "10.00");
        assert_eq!(clean("-10"), "10");
        assert_eq!(clean("1.50"), "1.50");
    }

    #[test]
    fn test_trailing_punctuation_leaves_no_whitespace() {
        // Trimming first would leave " Fire" here.
        assert_eq!(clean(" ! Fire"), "Fire");
        assert_eq!(clean("Fire ! "), "Fire");
    }

    #[test]
    fn test_already_clean_input_unchanged() {
        assert_eq!(clean("Water Gun"), "Water Gun");
        assert_eq!(clean(""), "");
    }

    proptest! {
        #[test]
        fn prop_output_is_whitelisted_and_trimmed(s in ".*") {
            let out = clean(&s);
            prop_assert!(out.chars().all(allowed));
            prop_assert_eq!(out.trim(), out.as_str());
        }

        #[test]
        fn prop_clean_is_idempotent(s in ".*") {
            let once = clean(&s);
            prop_assert_eq!(clean(&once), once.clone());
        }
    }
}
