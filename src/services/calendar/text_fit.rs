//! Ellipsis truncation against a pixel budget.

pub const ELLIPSIS: &str = "...";

/// Fit `text` into `max_width` pixels as measured by `measure`.
///
/// Text that already fits is returned untouched. Otherwise the longest
/// character prefix whose width stays strictly below
/// `max_width - measure(ELLIPSIS)` is kept and the ellipsis appended. When not
/// even one character fits, the result is the bare ellipsis.
///
/// Truncation is per `char`, so a grapheme cluster made of several scalar
/// values (emoji with modifiers, combining marks) can be cut in half.
pub fn fit_text<F>(text: &str, max_width: f32, measure: F) -> String
where
    F: Fn(&str) -> f32,
{
    if measure(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width - measure(ELLIPSIS);
    let mut boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
    boundaries.push(text.len());

    // Largest prefix (in chars) that fits the budget; prefix 0 always qualifies.
    let mut low = 0usize;
    let mut high = boundaries.len() - 1;
    while low < high {
        let mid = (low + high).div_ceil(2);
        if measure(&text[..boundaries[mid]]) < budget {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    format!("{}{}", &text[..boundaries[low]], ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Every char is 10px wide.
    fn mono(text: &str) -> f32 {
        text.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_fitting_text_is_unchanged() {
        assert_eq!(fit_text("hello", 50.0, mono), "hello");
        assert_eq!(fit_text("hello", 100.0, mono), "hello");
    }

    #[test]
    fn test_exact_width_gets_no_ellipsis() {
        assert_eq!(fit_text("abcd", 40.0, mono), "abcd");
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        // budget = 80 - 30 = 50, prefix must be < 50 → 4 chars
        assert_eq!(fit_text("abcdefghij", 80.0, mono), "abcd...");
    }

    #[test]
    fn test_tiny_width_degrades_to_ellipsis() {
        assert_eq!(fit_text("abcdefghij", 20.0, mono), "...");
        assert_eq!(fit_text("abcdefghij", 0.0, mono), "...");
        assert_eq!(fit_text("abcdefghij", -5.0, mono), "...");
    }

    #[test]
    fn test_multibyte_text_cut_on_char_boundaries() {
        assert_eq!(fit_text("설날연휴기간", 55.0, mono), "설날...");
    }

    proptest! {
        #[test]
        fn prop_fit_is_idempotent(text in "\\PC{0,40}", width in 31.0f32..400.0) {
            let once = fit_text(&text, width, mono);
            let twice = fit_text(&once, width, mono);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_fitting_text_is_identity(text in "[a-z ]{0,20}", extra in 0.0f32..100.0) {
            let width = mono(&text) + extra;
            prop_assert_eq!(fit_text(&text, width, mono), text);
        }

        #[test]
        fn prop_result_fits_when_budget_allows(text in "\\PC{0,40}", width in 31.0f32..400.0) {
            let fitted = fit_text(&text, width, mono);
            prop_assert!(mono(&fitted) <= width);
        }
    }
}
