//! Helvetica advance widths (1/1000 em) for the printable ASCII range and
//! greedy word wrapping on top of them.

use super::writer::{Font, PT_PER_MM};

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn char_width(ch: char, font: Font) -> u16 {
    let table = match font {
        Font::Regular => &HELVETICA,
        Font::Bold => &HELVETICA_BOLD,
    };
    match ch {
        ' '..='~' => table[ch as usize - 32],
        '•' => 350,
        '©' => 737,
        '—' => 1000,
        _ => 556,
    }
}

/// Rendered width of `text` in millimetres.
pub fn text_width(text: &str, font: Font, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width(ch, font))).sum();
    units as f32 * size_pt / 1000.0 / PT_PER_MM
}

/// Split `text` into lines no wider than `max_width_mm`. A single word wider
/// than the limit gets a line of its own.
pub fn wrap_text(text: &str, font: Font, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if text_width(&candidate, font, size_pt) <= max_width_mm {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_is_wider_than_regular() {
        let regular = text_width("Confusion Matrix", Font::Regular, 11.0);
        let bold = text_width("Confusion Matrix", Font::Bold, 11.0);
        assert!(bold > regular);
    }

    #[test]
    fn width_scales_with_size() {
        // ten digits at 556 units, 10pt ⇒ 55.6pt
        let width = text_width("0123456789", Font::Regular, 10.0);
        assert!((width - 55.6 / PT_PER_MM).abs() < 1e-3);
    }

    #[test]
    fn wrapping_respects_the_limit() {
        let text = "Apply SMOTE technique to balance the dataset classes for better generalization.";
        let lines = wrap_text(text, Font::Regular, 11.0, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, Font::Regular, 11.0) <= 60.0);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_text("   ", Font::Bold, 11.0, 100.0).is_empty());
    }
}
