/// Log an error at most once per call site, for conditions that would
/// otherwise flood the output when hit once per pixel.
#[macro_export]
macro_rules! error_once {
    ($($arg:tt)+) => {{
        static ONCE: std::sync::Once = std::sync::Once::new();
        ONCE.call_once(|| {
            log::error!($($arg)+);
        });
    }};
}

/// Warning flavor of [`error_once!`].
#[macro_export]
macro_rules! warn_once {
    ($($arg:tt)+) => {{
        static ONCE: std::sync::Once = std::sync::Once::new();
        ONCE.call_once(|| {
            log::warn!($($arg)+);
        });
    }};
}

pub use error_once;
pub use warn_once;
