//! crates/steadylog/src/macros.rs
//! Call-site macros that capture file, line and module name.
//!
//! Each `log_*!` macro checks the threshold before any argument is evaluated
//! and validates the format string at compile time through `format_args!`.
//! Without an explicit `module:` they read the `LOG_MODULE_NAME` constant that
//! [`log_module!`](crate::log_module) declares in the calling module; a module
//! that logs without declaring one fails to compile.

/// Declares the module name used by `log_*!` calls in the enclosing module.
///
/// The constant is private to the module it is declared in, so child modules
/// declare their own.
///
/// ```
/// steadylog::log_module!("peer");
///
/// fn connect(addr: &str) {
///     steadylog::log_info!("connecting to {addr}");
/// }
/// # connect("127.0.0.1:6881");
/// ```
#[macro_export]
macro_rules! log_module {
    ($name:expr $(,)?) => {
        #[allow(dead_code)]
        const LOG_MODULE_NAME: &str = $name;
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($severity:expr, $module:expr, $($arg:tt)+) => {
        if $crate::enabled($severity) {
            $crate::emit(
                $severity,
                ::core::file!(),
                ::core::line!(),
                ::core::option::Option::Some($module),
                ::core::format_args!($($arg)+),
            );
        }
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error).
///
/// ```
/// steadylog::log_error!(module: "disk", "write failed: {}", "no space left");
/// ```
#[macro_export]
macro_rules! log_error {
    (module: $module:expr, $($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Error, $module, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Error, LOG_MODULE_NAME, $($arg)+)
    };
}

/// Logs at [`Severity::Warning`](crate::Severity::Warning).
#[macro_export]
macro_rules! log_warning {
    (module: $module:expr, $($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Warning, $module, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Warning, LOG_MODULE_NAME, $($arg)+)
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! log_info {
    (module: $module:expr, $($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Info, $module, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Info, LOG_MODULE_NAME, $($arg)+)
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug).
///
/// Without the `debug-log` feature this expands to `()`: the arguments are
/// neither evaluated nor type-checked.
#[cfg(feature = "debug-log")]
#[macro_export]
macro_rules! log_debug {
    (module: $module:expr, $($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Debug, $module, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Severity::Debug, LOG_MODULE_NAME, $($arg)+)
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug).
///
/// Without the `debug-log` feature this expands to `()`: the arguments are
/// neither evaluated nor type-checked.
#[cfg(not(feature = "debug-log"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ()
    };
}

/// Writes an empty line to standard error regardless of the threshold.
#[macro_export]
macro_rules! log_empty_line {
    () => {
        $crate::emit_blank_line()
    };
}
