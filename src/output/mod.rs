// Output formatting: fixed-width line bodies and the terminal writer.

pub mod ansi;
pub mod terminal;

use crate::status::StatusKind;
use ansi::{truncate_visible, visible_len};

/// Truncation mark appended to messages that don't fit.
pub const ELLIPSIS: char = '…';

/// Number of columns left for the message body once the marker and the
/// reserved trailing column are taken out of `width`.
///
/// Saturates at zero when `width` is too small to hold the marker.
pub fn available_width(status: StatusKind, width: usize) -> usize {
    width.saturating_sub(status.visible_width() + 1)
}

/// Format a message into a body exactly `available_width` columns wide.
///
/// Widths are terminal columns with escape sequences skipped, so wide CJK
/// text and colored messages line up the same as plain ASCII. Messages that
/// are too wide keep the prefix that fits in `avw - 1` columns and end with
/// [`ELLIPSIS`]; a style left open by the cut is reset before the mark.
/// Narrower ones are left-justified and padded with spaces. A zero-width
/// body is the empty string.
pub fn format_line(message: &str, status: StatusKind, width: usize) -> String {
    let avw = available_width(status, width);
    if avw == 0 {
        return String::new();
    }

    let cols = visible_len(message);
    if cols <= avw {
        return pad_to(message.to_string(), cols, avw);
    }

    let mut body = truncate_visible(message, avw - 1);
    let cols = visible_len(&body) + 1;
    body.push(ELLIPSIS);
    // a wide char dropped at the cut leaves a spare column
    pad_to(body, cols, avw)
}

fn pad_to(mut body: String, cols: usize, avw: usize) -> String {
    body.extend(std::iter::repeat(' ').take(avw.saturating_sub(cols)));
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_short_message() {
        let body = format_line("hello", StatusKind::Success, 20);
        assert_eq!(body, "hello        ");
        assert_eq!(body.chars().count(), 13);
    }

    #[test]
    fn test_truncates_long_message() {
        let body = format_line("a very long message", StatusKind::Success, 10);
        assert_eq!(body, "a …");
    }

    #[test]
    fn test_exact_fit_is_untouched() {
        let msg = "x".repeat(13);
        assert_eq!(format_line(&msg, StatusKind::Pending, 20), msg);
    }

    #[test]
    fn test_one_over_is_truncated() {
        let msg = "x".repeat(14);
        let body = format_line(&msg, StatusKind::Pending, 20);
        assert_eq!(body, format!("{}…", "x".repeat(12)));
    }

    #[test]
    fn test_degenerate_widths_give_empty_body() {
        for width in [0, 1, 6, 7] {
            assert_eq!(format_line("hello", StatusKind::Failure, width), "");
        }
    }

    #[test]
    fn test_single_column_body_is_just_the_mark() {
        // width 8 leaves one column: nothing but the ellipsis fits
        assert_eq!(format_line("hello", StatusKind::Warning, 8), "…");
        assert_eq!(format_line("h", StatusKind::Warning, 8), "h");
    }

    #[test]
    fn test_multibyte_truncation() {
        let body = format_line("héllo wörld ünïcode", StatusKind::Success, 14);
        // avw = 7
        assert_eq!(body, "héllo …");
        assert_eq!(body.chars().count(), 7);
    }

    #[test]
    fn test_wide_chars_are_measured_in_columns() {
        // avw = 13: six double-width chars plus the mark
        let body = format_line("日本語のメッセージはとても長いです", StatusKind::Pending, 20);
        assert_eq!(body, "日本語のメッ…");
        assert_eq!(visible_len(&body), 13);

        let body = format_line("日本語", StatusKind::Pending, 20);
        assert_eq!(body, format!("日本語{}", " ".repeat(7)));
    }

    #[test]
    fn test_straddling_wide_char_is_padded() {
        // avw = 6: "日本" is 4 columns, "語" would need 2 more before the mark
        let body = format_line("日本語です", StatusKind::Success, 13);
        assert_eq!(body, "日本… ");
        assert_eq!(visible_len(&body), 6);
    }

    #[test]
    fn test_colored_message_is_padded_by_visible_width() {
        let body = format_line("\x1b[32mok\x1b[0m", StatusKind::Pending, 20);
        assert_eq!(body, format!("\x1b[32mok\x1b[0m{}", " ".repeat(11)));
        assert_eq!(visible_len(&body), 13);
    }

    #[test]
    fn test_colored_message_truncation_resets_style() {
        let body = format_line("\x1b[32mgreen text here\x1b[0m", StatusKind::Pending, 20);
        assert_eq!(body, "\x1b[32mgreen text h\x1b[0m…");
        assert_eq!(visible_len(&body), 13);
    }
}
