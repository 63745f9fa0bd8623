// SPDX-License-Identifier: MIT OR Apache-2.0

//! Greedy word wrapping for status text

/// Anything that can report how wide a string renders
pub trait TextMeasure {
    /// Rendered width of `text` in pixels at `font_size`
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Split `text` into lines no wider than `max_width`.
///
/// Each line is the longest prefix of the remaining text that fits, backed
/// off to the nearest space at or before the first character that does not
/// fit. The space a line breaks on is consumed. When the fitting prefix holds
/// no usable space a single character is emitted so the loop always makes
/// progress, even when `max_width` cannot hold one character.
pub fn wrap_text<M>(text: &str, max_width: f32, font_size: f32, measure: &M) -> Vec<String>
where
    M: TextMeasure + ?Sized,
{
    let mut lines = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        if measure.text_width(remaining, font_size) <= max_width {
            lines.push(remaining.to_string());
            break;
        }

        let fit = fitting_prefix_len(remaining, max_width, font_size, measure);
        match break_space(remaining, fit) {
            Some(space) => {
                lines.push(remaining[..space].to_string());
                remaining = &remaining[space + 1..];
            }
            None => {
                let forced = remaining.chars().next().map_or(remaining.len(), char::len_utf8);
                lines.push(remaining[..forced].to_string());
                remaining = &remaining[forced..];
            }
        }
    }

    lines
}

/// Byte length of the longest proper prefix that fits, possibly 0
fn fitting_prefix_len<M>(text: &str, max_width: f32, font_size: f32, measure: &M) -> usize
where
    M: TextMeasure + ?Sized,
{
    text.char_indices()
        .rev()
        .map(|(idx, _)| idx)
        .find(|&idx| idx == 0 || measure.text_width(&text[..idx], font_size) <= max_width)
        .unwrap_or(0)
}

/// Byte offset of the space to break on, searching back from `fit`
fn break_space(text: &str, fit: usize) -> Option<usize> {
    if fit > 0 && text[fit..].starts_with(' ') {
        return Some(fit);
    }
    text[..fit].rfind(' ').filter(|&pos| pos > 0)
}
