/// Logs entry into and exit from `$body` at debug level.
///
/// The name is either an expression or a bracketed format string with its
/// arguments, e.g. `log_fn!(["bind `{}`", class_name], { .. })`.
#[macro_export]
macro_rules! log_fn {
    ([$fmt:literal $(, $arg:expr)* $(,)?], $body:block) => {
        $crate::log_fn!(format!($fmt $(, $arg)*), $body)
    };
    ($name:expr, $body:block) => {{
        let name = $name;
        log::debug!("-> {}", name);
        let result = $body;
        log::debug!("<- {}", name);
        result
    }};
}
