//! Fourteen-segment stroke font for canvas labels.
//!
//! Everything the pipeline draws is line geometry, so labels are laid out as
//! line segments too: each glyph is a bitmask over fourteen canonical
//! segments on a unit cell. Coverage is digits, Latin letters, and the
//! handful of punctuation the demos use; lowercase folds to uppercase and
//! unknown characters advance without drawing.

use glam::Vec2;

/// Glyph advance as a fraction of the text size.
const ADVANCE: f32 = 0.8;
/// Glyph cell width as a fraction of the text size.
const CELL_WIDTH: f32 = 0.6;

/// Segment endpoints on a 1x1 cell, y down. Order defines the mask bits.
const SEGMENTS: [([f32; 2], [f32; 2]); 14] = [
    ([0.0, 0.0], [1.0, 0.0]), // 0  top
    ([1.0, 0.0], [1.0, 0.5]), // 1  upper right
    ([1.0, 0.5], [1.0, 1.0]), // 2  lower right
    ([0.0, 1.0], [1.0, 1.0]), // 3  bottom
    ([0.0, 0.5], [0.0, 1.0]), // 4  lower left
    ([0.0, 0.0], [0.0, 0.5]), // 5  upper left
    ([0.0, 0.5], [0.5, 0.5]), // 6  middle left
    ([0.5, 0.5], [1.0, 0.5]), // 7  middle right
    ([0.0, 0.0], [0.5, 0.5]), // 8  diagonal from top left
    ([0.5, 0.0], [0.5, 0.5]), // 9  upper middle
    ([1.0, 0.0], [0.5, 0.5]), // 10 diagonal from top right
    ([0.5, 0.5], [0.0, 1.0]), // 11 diagonal to bottom left
    ([0.5, 0.5], [0.5, 1.0]), // 12 lower middle
    ([0.5, 0.5], [1.0, 1.0]), // 13 diagonal to bottom right
];

const A: u16 = 1 << 0;
const B: u16 = 1 << 1;
const C: u16 = 1 << 2;
const D: u16 = 1 << 3;
const E: u16 = 1 << 4;
const F: u16 = 1 << 5;
const G1: u16 = 1 << 6;
const G2: u16 = 1 << 7;
const H: u16 = 1 << 8;
const I: u16 = 1 << 9;
const J: u16 = 1 << 10;
const K: u16 = 1 << 11;
const L: u16 = 1 << 12;
const M: u16 = 1 << 13;

fn glyph_mask(ch: char) -> Option<u16> {
    let mask = match ch.to_ascii_uppercase() {
        '0' => A | B | C | D | E | F | J | K,
        '1' => B | C | J,
        '2' => A | B | G1 | G2 | E | D,
        '3' => A | B | C | D | G2,
        '4' => F | G1 | G2 | B | C,
        '5' => A | F | G1 | G2 | C | D,
        '6' => A | F | E | D | C | G1 | G2,
        '7' => A | B | C,
        '8' => A | B | C | D | E | F | G1 | G2,
        '9' => A | B | C | D | F | G1 | G2,
        'A' => A | B | C | E | F | G1 | G2,
        'B' => A | B | C | D | G2 | I | L,
        'C' => A | D | E | F,
        'D' => A | B | C | D | I | L,
        'E' => A | D | E | F | G1 | G2,
        'F' => A | E | F | G1 | G2,
        'G' => A | C | D | E | F | G2,
        'H' => B | C | E | F | G1 | G2,
        'I' => A | D | I | L,
        'J' => B | C | D | E,
        'K' => E | F | G1 | J | M,
        'L' => D | E | F,
        'M' => B | C | E | F | H | J,
        'N' => B | C | E | F | H | M,
        'O' => A | B | C | D | E | F,
        'P' => A | B | E | F | G1 | G2,
        'Q' => A | B | C | D | E | F | M,
        'R' => A | B | E | F | G1 | G2 | M,
        'S' => A | C | D | F | G1 | G2,
        'T' => A | I | L,
        'U' => B | C | D | E | F,
        'V' => E | F | J | K,
        'W' => B | C | E | F | K | M,
        'X' => H | J | K | M,
        'Y' => H | J | L,
        'Z' => A | D | J | K,
        // Greek theta: the full ring with the middle bar.
        'θ' | 'Θ' => A | B | C | D | E | F | G1 | G2,
        '-' => G1 | G2,
        '+' => G1 | G2 | I | L,
        '_' => D,
        _ => return None,
    };
    Some(mask)
}

/// Segments that fall outside the fourteen-segment grid.
fn special_segments(ch: char) -> Option<Vec<([f32; 2], [f32; 2])>> {
    match ch {
        '.' => Some(vec![([0.4, 1.0], [0.6, 1.0])]),
        ',' => Some(vec![([0.5, 0.9], [0.35, 1.15])]),
        '=' => Some(vec![
            ([0.0, 0.35], [1.0, 0.35]),
            ([0.0, 0.65], [1.0, 0.65]),
        ]),
        '°' => Some(vec![
            ([0.2, 0.0], [0.6, 0.0]),
            ([0.6, 0.0], [0.6, 0.3]),
            ([0.6, 0.3], [0.2, 0.3]),
            ([0.2, 0.3], [0.2, 0.0]),
        ]),
        _ => None,
    }
}

fn glyph_segments(ch: char) -> Vec<([f32; 2], [f32; 2])> {
    if let Some(segments) = special_segments(ch) {
        return segments;
    }
    match glyph_mask(ch) {
        Some(mask) => SEGMENTS
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, s)| *s)
            .collect(),
        None => Vec::new(),
    }
}

/// Lay `text` out as line segments, centered on `at`, `size` CSS pixels
/// tall. Matches the canvas `textAlign: center, textBaseline: middle`
/// convention the demos were written against.
pub fn layout(text: &str, at: Vec2, size: f32) -> Vec<(Vec2, Vec2)> {
    let count = text.chars().count();
    if count == 0 {
        return Vec::new();
    }
    let total_width = (count as f32 - 1.0) * ADVANCE * size + CELL_WIDTH * size;
    let top_left = at - Vec2::new(total_width * 0.5, size * 0.5);

    let mut segments = Vec::new();
    for (index, ch) in text.chars().enumerate() {
        let cell = top_left + Vec2::new(index as f32 * ADVANCE * size, 0.0);
        for (from, to) in glyph_segments(ch) {
            segments.push((
                cell + Vec2::new(from[0] * CELL_WIDTH * size, from[1] * size),
                cell + Vec2::new(to[0] * CELL_WIDTH * size, to[1] * size),
            ));
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_have_glyphs() {
        for ch in '0'..='9' {
            assert!(!glyph_segments(ch).is_empty(), "no glyph for {ch:?}");
        }
    }

    #[test]
    fn test_lowercase_folds_to_uppercase() {
        assert_eq!(glyph_segments('a'), glyph_segments('A'));
    }

    #[test]
    fn test_unknown_characters_advance_silently() {
        assert!(glyph_segments('~').is_empty());
        // Three cells wide, only the two 'I' glyphs produce geometry.
        let segments = layout("I~I", Vec2::ZERO, 16.0);
        assert_eq!(segments.len(), 2 * glyph_segments('I').len());
    }

    #[test]
    fn test_layout_is_centered() {
        let segments = layout("HH", Vec2::new(100.0, 50.0), 16.0);
        let min_x = segments
            .iter()
            .flat_map(|(a, b)| [a.x, b.x])
            .fold(f32::INFINITY, f32::min);
        let max_x = segments
            .iter()
            .flat_map(|(a, b)| [a.x, b.x])
            .fold(f32::NEG_INFINITY, f32::max);
        let mid = (min_x + max_x) * 0.5;
        assert!((mid - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_empty_text_is_empty() {
        assert!(layout("", Vec2::ZERO, 16.0).is_empty());
    }
}
