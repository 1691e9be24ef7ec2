// Composition tests: StatusWriter driving format_line against an in-memory
// sink, checking the exact byte stream a terminal would receive.

use statusline::output::ansi::visible_len;
use statusline::{failure, pending, success, warning, StatusKind, StatusWriter};

fn captured(writer: StatusWriter<Vec<u8>>) -> String {
    String::from_utf8(writer.into_inner()).unwrap()
}

// ============================================================
// Print -> update -> end
// ============================================================

#[test]
fn pending_then_two_updates_then_end() {
    let mut w = StatusWriter::new(Vec::new(), 20);
    w.print_line(StatusKind::Pending, "task");
    w.update_status(StatusKind::Success);
    w.update_status(StatusKind::Failure);
    w.end_line();

    let body = "task         ";
    assert_eq!(
        captured(w),
        format!("{body}[....]\r{body}[PASS]\r{body}[FAIL]\n")
    );
}

#[test]
fn only_one_terminal_line_results() {
    let mut w = StatusWriter::new(Vec::new(), 40);
    w.pending("compile");
    w.mark_success().mark_warning().mark_failure().end_line();

    let out = captured(w);
    assert_eq!(out.matches('\n').count(), 1);
    assert!(out.ends_with('\n'));
    assert_eq!(out.matches('\r').count(), 3);
    // Whatever follows the last carriage return is what stays on screen
    let visible = out.rsplit('\r').next().unwrap();
    assert!(visible.trim_end().ends_with("[FAIL]"));
}

#[test]
fn update_never_changes_stored_body() {
    let mut w = StatusWriter::new(Vec::new(), 30);
    w.warning("a message that is definitely too long for thirty");
    let body = w.last_message().to_string();
    for kind in StatusKind::ALL {
        w.update_status(kind);
        assert_eq!(w.last_message(), body);
        assert_eq!(w.last_status(), kind);
    }
}

#[test]
fn second_line_replaces_tracked_state() {
    let mut w = StatusWriter::new(Vec::new(), 20);
    w.success("first");
    w.end_line();
    w.pending("second");
    w.mark_failure().end_line();

    assert_eq!(
        captured(w),
        "first        [PASS]\nsecond       [....]\rsecond       [FAIL]\n"
    );
}

// ============================================================
// Width invariants with and without color
// ============================================================

#[test]
fn rendered_line_is_one_column_short_of_width() {
    for color in [false, true] {
        for width in 8..50 {
            let mut w = StatusWriter::with_color(Vec::new(), width, color);
            w.pending("some status message of moderate length");
            let first = captured(w);
            assert_eq!(visible_len(&first), width - 1, "color={color} width={width}");

            let mut w = StatusWriter::with_color(Vec::new(), width, color);
            w.pending("short");
            w.mark_failure();
            let out = captured(w);
            let update = out.rsplit('\r').next().unwrap();
            assert_eq!(visible_len(update), width - 1, "color={color} width={width}");
        }
    }
}

#[test]
fn colored_marker_is_written_verbatim() {
    let mut w = StatusWriter::with_color(Vec::new(), 20, true);
    w.success("ok");
    assert!(w.color());
    assert_eq!(
        captured(w),
        "ok           [\x1b[1m\x1b[32mPASS\x1b[0m]"
    );
}

#[test]
fn degenerate_width_writes_marker_only() {
    let mut w = StatusWriter::new(Vec::new(), 0);
    w.failure("nothing fits");
    w.mark_success().end_line();
    assert_eq!(w.last_message(), "");
    assert_eq!(captured(w), "[FAIL]\r[PASS]\n");
}

// ============================================================
// Format-string convenience
// ============================================================

#[test]
fn macros_interpolate_and_pick_kind() {
    let mut w = StatusWriter::new(Vec::new(), 30);
    let files = 12;

    pending!(w, "copying {files} files");
    assert_eq!(w.last_status(), StatusKind::Pending);
    assert_eq!(w.last_message().trim_end(), "copying 12 files");

    success!(w, "{} of {}", 3, 4);
    assert_eq!(w.last_status(), StatusKind::Success);
    assert_eq!(w.last_message().trim_end(), "3 of 4");

    warning!(w, "disk at {}%", 91);
    assert_eq!(w.last_status(), StatusKind::Warning);
    assert_eq!(w.last_message().trim_end(), "disk at 91%");

    failure!(w, "exit code {code}", code = 2);
    assert_eq!(w.last_status(), StatusKind::Failure);
    assert_eq!(w.last_message().trim_end(), "exit code 2");
}

#[test]
fn literal_template_with_percent_is_kept() {
    let mut w = StatusWriter::new(Vec::new(), 30);
    w.failure_fmt(format_args!("50% %d %s done"));
    assert_eq!(w.last_message().trim_end(), "50% %d %s done");
}

#[test]
fn wide_and_colored_messages_stay_on_one_row() {
    let messages = [
        "日本語のメッセージはとても長いです",
        "🚀 deploying 🚀 to every region we have",
        "\x1b[32mgreen text here\x1b[0m",
        "\x1b[31mok\x1b[0m",
    ];
    for msg in messages {
        let mut w = StatusWriter::new(Vec::new(), 20);
        w.pending(msg);
        w.mark_success();
        let out = captured(w);
        for row in out.split('\r') {
            assert_eq!(visible_len(row), 19, "msg={msg:?} row={row:?}");
        }
    }
}
