//! Font size lookup for the card face, driven by the longest line of the displayed text.

/// Size used when there is nothing but whitespace to show.
pub const DEFAULT_SIZE: f32 = 100.0;

const FRONT_SIZES: [(usize, f32); 4] = [(2, 100.0), (15, 60.0), (30, 50.0), (40, 44.0)];
const FRONT_FALLBACK: f32 = 30.0;

const BACK_SIZES: [(usize, f32); 3] = [(15, 52.0), (30, 45.0), (40, 38.0)];
const BACK_FALLBACK: f32 = 25.0;

/// Character count of the longest `\n`-separated line.
pub fn longest_line_len(text: &str) -> usize {
    text.split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

pub fn size_for(text: &str, is_front: bool) -> f32 {
    if text.trim().is_empty() {
        return DEFAULT_SIZE;
    }

    let char_count = longest_line_len(text);
    let (table, fallback) = if is_front {
        (&FRONT_SIZES[..], FRONT_FALLBACK)
    } else {
        (&BACK_SIZES[..], BACK_FALLBACK)
    };

    let size = table
        .iter()
        .find(|(max_chars, _)| char_count <= *max_chars)
        .map_or(fallback, |&(_, size)| size);

    log::debug!("text {text:?}: longest line {char_count} chars, is_front={is_front}, size {size}");
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(n: usize) -> String {
        "a".repeat(n)
    }

    #[test]
    fn test_blank_text_uses_default() {
        for is_front in [true, false] {
            assert_eq!(size_for("", is_front), 100.0);
            assert_eq!(size_for("   ", is_front), 100.0);
            assert_eq!(size_for("\n \t", is_front), 100.0);
        }
    }

    #[test]
    fn test_front_thresholds() {
        assert_eq!(size_for("木", true), 100.0);
        assert_eq!(size_for(&chars(2), true), 100.0);
        assert_eq!(size_for(&chars(3), true), 60.0);
        assert_eq!(size_for(&chars(15), true), 60.0);
        assert_eq!(size_for(&chars(16), true), 50.0);
        assert_eq!(size_for(&chars(30), true), 50.0);
        assert_eq!(size_for(&chars(40), true), 44.0);
        assert_eq!(size_for(&chars(41), true), 30.0);
    }

    #[test]
    fn test_back_thresholds() {
        assert_eq!(size_for(&chars(1), false), 52.0);
        assert_eq!(size_for(&chars(15), false), 52.0);
        assert_eq!(size_for(&chars(16), false), 45.0);
        assert_eq!(size_for(&chars(31), false), 38.0);
        assert_eq!(size_for(&chars(40), false), 38.0);
        assert_eq!(size_for(&chars(41), false), 25.0);
    }

    #[test]
    fn test_longest_line_decides() {
        let text = format!("ki\n{}", chars(20));
        assert_eq!(size_for(&text, false), 45.0);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 16 three-byte characters
        let text = "日".repeat(16);
        assert_eq!(longest_line_len(&text), 16);
        assert_eq!(size_for(&text, true), 50.0);
    }
}
