//! Console logging
//!
//! On wasm32 these forward to the browser console. Native builds (tests,
//! tooling) compile them to nothing, but the format arguments are still
//! type checked so both targets stay in sync.

#[cfg(target_arch = "wasm32")]
pub fn log_str(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn_str(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// `console.log` with `format!` syntax
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::log::log_str(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// `console.warn` with `format!` syntax
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::log::warn_str(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
