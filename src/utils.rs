use ratatui::style::Color;
use unicode_width::UnicodeWidthChar;

/// Truncate to a display width, appending "..." when anything was cut.
/// Width-aware because the content carries emoji and wide glyphs.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(1)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(1);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Parse a "#RRGGBB" accent color from the content store.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_to_width("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_long_string() {
        let s = "This is a very long string that should be truncated";
        let result = truncate_to_width(s, 20);
        assert_eq!(result, "This is a very lo...");
    }

    #[test]
    fn test_truncate_exact_width() {
        assert_eq!(truncate_to_width("Exactly twenty!!", 20), "Exactly twenty!!");
    }

    #[test]
    fn test_truncate_empty() {
        assert_eq!(truncate_to_width("", 20), "");
    }

    #[test]
    fn test_truncate_counts_wide_glyphs() {
        // The house emoji is two columns wide; budget 6 leaves no room for
        // it plus the ellipsis past the first one.
        let s = "🏠🏠🏠🏠";
        let result = truncate_to_width(s, 6);
        assert_eq!(result, "🏠...");
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FE90E8"),
            Some(Color::Rgb(0xFE, 0x90, 0xE8))
        );
        assert_eq!(
            parse_hex_color("#99E865"),
            Some(Color::Rgb(0x99, 0xE8, 0x65))
        );
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert_eq!(parse_hex_color("FE90E8"), None);
        assert_eq!(parse_hex_color("#FE90"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }
}
