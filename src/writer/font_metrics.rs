//! Base-14 Helvetica metrics for text placement.
//!
//! Widths are the standard AFM advance widths in 1/1000 em for the printable
//! ASCII range. Oblique variants share the upright widths.

/// Helvetica widths for U+0020..=U+007E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Helvetica-Bold widths for U+0020..=U+007E.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// Width used for characters outside the table.
const DEFAULT_WIDTH: u16 = 500;

/// Advance width of `ch` in 1/1000 em.
fn char_width(font_name: &str, ch: char) -> u16 {
    let table = if font_name.starts_with("Helvetica-Bold") {
        &HELVETICA_BOLD_WIDTHS
    } else {
        &HELVETICA_WIDTHS
    };
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        DEFAULT_WIDTH
    }
}

/// Width of `text` in points when set in `font_name` at `font_size`.
pub fn text_width(font_name: &str, font_size: f32, text: &str) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(font_name, c) as u32).sum();
    units as f32 * font_size / 1000.0
}

/// Largest size not above `preferred` (and not below `min`) at which `text`
/// fits in `max_width` points.
pub fn fit_font_size(font_name: &str, preferred: f32, min: f32, text: &str, max_width: f32) -> f32 {
    let width = text_width(font_name, preferred, text);
    if width <= max_width || width == 0.0 {
        return preferred;
    }
    (preferred * max_width / width).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        // "Hello": H=722 e=556 l=222 l=222 o=556
        assert!((text_width("Helvetica", 1000.0, "Hello") - 2278.0).abs() < 0.01);
        assert!((text_width("Helvetica-Bold", 10.0, "W") - 9.44).abs() < 0.001);
    }

    #[test]
    fn test_oblique_shares_upright_widths() {
        assert_eq!(
            text_width("Helvetica-Oblique", 12.0, "pages"),
            text_width("Helvetica", 12.0, "pages")
        );
    }

    #[test]
    fn test_unknown_chars_use_default() {
        assert!((text_width("Helvetica", 1000.0, "é") - 500.0).abs() < 0.01);
    }

    #[test]
    fn test_fit_font_size() {
        assert_eq!(fit_font_size("Helvetica", 12.0, 6.0, "cat", 100.0), 12.0);
        let long = "incomprehensibilities";
        let fitted = fit_font_size("Helvetica", 12.0, 6.0, long, 60.0);
        assert!(fitted < 12.0);
        assert!(text_width("Helvetica", fitted, long) <= 60.0 + 0.01);
        assert_eq!(fit_font_size("Helvetica", 12.0, 6.0, &long.repeat(5), 60.0), 6.0);
    }
}
