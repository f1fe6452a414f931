//! Text rendering helpers shared by every tree variant.
//!
//! All output is line-oriented: every row ends with `'\n'` and there is no
//! framing or width normalization beyond the indentation described below.

use std::num::NonZeroU64;

use crate::types::Count;

/// Glyph for one unit of broadleaf foliage.
pub const LEAF: char = '#';
/// Glyph for one unit of fruit.
pub const FRUIT: char = '.';
/// Glyph for one unit of pine needles.
pub const NEEDLE: char = '*';
/// A single trunk segment, without indentation.
pub const TRUNK: &str = " | ";

/// Renders `count` glyphs wrapped into rows of `width`.
///
/// Any partial row (`count % width` glyphs) comes first, followed by
/// `count / width` full rows.
///
/// ### Parameters
/// - `count` - Total number of glyphs to draw.
/// - `glyph` - Character used for every unit.
/// - `width` - Width of a full row.
///
/// ### Returns
/// The rows joined together, each newline-terminated. Empty when `count`
/// is `0`.
pub fn rows(count: Count, glyph: char, width: NonZeroU64) -> String {
    let mut out = String::new();
    let width = width.get();

    let partial = count % width;
    if partial > 0 {
        push_run(&mut out, glyph, partial);
        out.push('\n');
    }

    for _ in 0..count / width {
        push_run(&mut out, glyph, width);
        out.push('\n');
    }
    out
}

/// Renders `height` trunk segments, each shifted right by `indent` spaces.
pub fn trunk(height: Count, indent: Count) -> String {
    let mut out = String::new();
    for _ in 0..height {
        push_run(&mut out, ' ', indent);
        out.push_str(TRUNK);
        out.push('\n');
    }
    out
}

/// Renders a centred triangle of needles with `levels` rows.
///
/// Row `i` (from the top) holds `1 + 2i` needles behind `levels - i - 1`
/// spaces, so the widest row sits flush left at the bottom.
pub fn pine_levels(levels: Count) -> String {
    let mut out = String::new();
    for row in 0..levels {
        push_run(&mut out, ' ', levels - row - 1);
        push_run(&mut out, NEEDLE, 1 + 2 * row);
        out.push('\n');
    }
    out
}

/// Indentation that centres a trunk under a pine of `levels` rows.
#[inline]
pub fn pine_trunk_indent(levels: Count) -> Count {
    levels.saturating_sub(1)
}

#[inline]
fn push_run(out: &mut String, glyph: char, n: Count) {
    out.extend(std::iter::repeat_n(glyph, n as usize));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ROW_WIDTH;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, "")]
    #[case(1, "#\n")]
    #[case(3, "###\n")]
    #[case(5, "##\n###\n")]
    #[case(7, "#\n###\n###\n")]
    fn rows_put_partial_row_first(#[case] count: Count, #[case] expected: &str) {
        assert_eq!(rows(count, LEAF, ROW_WIDTH), expected);
    }

    #[test]
    fn rows_use_the_given_glyph() {
        assert_eq!(rows(4, FRUIT, ROW_WIDTH), ".\n...\n");
    }

    #[test]
    fn rows_of_width_one_stack_single_glyphs() {
        assert_eq!(rows(3, LEAF, NonZeroU64::MIN), "#\n#\n#\n");
    }

    #[test]
    fn rows_wider_than_count_give_one_partial_row() {
        let width = NonZeroU64::new(5).unwrap();
        assert_eq!(rows(4, FRUIT, width), "....\n");
        assert_eq!(rows(10, FRUIT, width), ".....\n.....\n");
    }

    #[test]
    fn trunk_stacks_one_segment_per_unit() {
        assert_eq!(trunk(0, 0), "");
        assert_eq!(trunk(2, 0), " | \n | \n");
        assert_eq!(trunk(2, 3), "    | \n    | \n");
    }

    #[test]
    fn pine_levels_draws_centred_triangle() {
        let expected = concat!(
            "   *\n", //
            "  ***\n",
            " *****\n",
            "*******\n",
        );
        assert_eq!(pine_levels(4), expected);
    }

    #[test]
    fn pine_levels_row_shape_holds_for_every_row() {
        let h = 9;
        let out = pine_levels(h);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), h as usize);

        for (i, line) in lines.iter().enumerate() {
            let i = i as Count;
            let spaces = line.chars().take_while(|&c| c == ' ').count() as Count;
            let needles = line.chars().filter(|&c| c == NEEDLE).count() as Count;
            assert_eq!(spaces, h - i - 1, "row {i}");
            assert_eq!(needles, 1 + 2 * i, "row {i}");
            assert_eq!(line.len() as Count, spaces + needles, "row {i}");
        }
    }

    #[test]
    fn pine_trunk_indent_never_underflows() {
        assert_eq!(pine_trunk_indent(0), 0);
        assert_eq!(pine_trunk_indent(1), 0);
        assert_eq!(pine_trunk_indent(4), 3);
    }
}
