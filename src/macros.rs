// Format-string shorthands for printing status lines.
//
//     pending!(writer, "Copying {} files", count);
//     writer.mark_success().end_line();

/// Print a pending status line using `format!` syntax.
#[macro_export]
macro_rules! pending {
    ($writer:expr, $($arg:tt)+) => {
        $writer.pending_fmt(::std::format_args!($($arg)+))
    };
}

/// Print a success status line using `format!` syntax.
#[macro_export]
macro_rules! success {
    ($writer:expr, $($arg:tt)+) => {
        $writer.success_fmt(::std::format_args!($($arg)+))
    };
}

/// Print a warning status line using `format!` syntax.
#[macro_export]
macro_rules! warning {
    ($writer:expr, $($arg:tt)+) => {
        $writer.warning_fmt(::std::format_args!($($arg)+))
    };
}

/// Print a failure status line using `format!` syntax.
#[macro_export]
macro_rules! failure {
    ($writer:expr, $($arg:tt)+) => {
        $writer.failure_fmt(::std::format_args!($($arg)+))
    };
}
