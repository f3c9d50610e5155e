use crate::modules::documents::models::Font;

/// Measures rendered text width
pub trait TextMetrics {
    /// Width of `text` in points when set in `font` at `size` points
    fn string_width(&self, text: &str, font: Font, size: f32) -> f32;
}

/// Advance widths of the standard Helvetica faces (1/1000 em), ASCII 32..=126
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

/// Width used for glyphs outside the tables
const FALLBACK_WIDTH: u16 = 556;

/// Text metrics of the PDF base-14 Helvetica and Helvetica-Bold fonts
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl HelveticaMetrics {
    pub fn new() -> Self {
        Self
    }

    fn glyph_width(font: Font, ch: char) -> u16 {
        let table = match font {
            Font::Helvetica => &HELVETICA_WIDTHS,
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };

        match ch {
            ' '..='~' => table[ch as usize - 32],
            'º' => 365,
            'ª' => 370,
            '€' => 556,
            _ => match fold_accent(ch) {
                Some(base) => table[base as usize - 32],
                None => FALLBACK_WIDTH,
            },
        }
    }
}

impl TextMetrics for HelveticaMetrics {
    fn string_width(&self, text: &str, font: Font, size: f32) -> f32 {
        let units: u32 = text
            .chars()
            .map(|ch| Self::glyph_width(font, ch) as u32)
            .sum();
        units as f32 * size / 1000.0
    }
}

/// Unaccented ASCII letter with the same advance width
fn fold_accent(ch: char) -> Option<char> {
    let base = match ch {
        'á' | 'à' | 'â' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'Á' | 'À' | 'Â' | 'Ä' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ñ' => 'N',
        'Ç' => 'C',
        _ => return None,
    };
    Some(base)
}

/// Greedy word wrap to a maximum line width
///
/// Words are never split, so a single word wider than `max_width` gets a line
/// of its own. Text without words yields one empty line.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font: Font,
    size: f32,
    metrics: &dyn TextMetrics,
) -> Vec<String> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return vec![String::new()];
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();

    for word in words {
        let candidate = format!("{} {}", current, word);
        if metrics.string_width(&candidate, font, size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    lines.push(current);
    lines
}
