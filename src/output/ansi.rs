// Helpers for measuring and cutting text that may carry ANSI escape sequences.
//
// Widths are terminal columns, not chars: CJK and most emoji take two
// columns, combining marks and control characters take none.

use unicode_width::UnicodeWidthChar;

const ESC: char = '\x1b';

/// SGR reset, appended after a cut that may have left a style open.
pub const RESET: &str = "\x1b[0m";

/// One piece of a string: either printable text or an escape sequence.
enum Segment<'a> {
    Text(char),
    Escape(&'a str),
}

/// Split `text` into printable chars and whole escape sequences.
///
/// CSI sequences run from `ESC [` to the first byte in `@..=~`. Any other
/// escape covers `ESC` plus the following char.
fn segments(text: &str) -> impl Iterator<Item = Segment<'_>> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        let mut chars = rest.char_indices();
        let (_, c) = chars.next()?;
        if c != ESC {
            rest = &rest[c.len_utf8()..];
            return Some(Segment::Text(c));
        }

        let end = match chars.next() {
            Some((_, '[')) => chars
                .find(|&(_, c)| ('@'..='~').contains(&c))
                .map_or(rest.len(), |(j, c)| j + c.len_utf8()),
            Some((i, c)) => i + c.len_utf8(),
            None => rest.len(),
        };
        let (seq, tail) = rest.split_at(end);
        rest = tail;
        Some(Segment::Escape(seq))
    })
}

fn char_width(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Number of terminal columns `text` occupies once escape sequences are
/// stripped. Carriage returns and other controls count as zero.
pub fn visible_len(text: &str) -> usize {
    segments(text)
        .map(|seg| match seg {
            Segment::Text(c) => char_width(c),
            Segment::Escape(_) => 0,
        })
        .sum()
}

/// Keep the longest prefix of `text` that fits in `max_cols` columns.
///
/// Escape sequences inside the prefix are carried through. If any were
/// kept, a [`RESET`] is appended so styles can't leak past the cut. A wide
/// char that would straddle the limit is dropped, so the result may be one
/// column short.
pub fn truncate_visible(text: &str, max_cols: usize) -> String {
    let mut out = String::new();
    let mut cols = 0;
    let mut styled = false;

    for seg in segments(text) {
        match seg {
            Segment::Escape(seq) => {
                out.push_str(seq);
                styled = true;
            }
            Segment::Text(c) => {
                let w = char_width(c);
                if cols + w > max_cols {
                    break;
                }
                out.push(c);
                cols += w;
            }
        }
    }

    if styled && !out.ends_with(RESET) {
        out.push_str(RESET);
    }
    out
}
