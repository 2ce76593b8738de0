//! Logging macros for elkit
//!
//! Thin console logging that works on WASM and native targets alike. All
//! macros compile to nothing in release builds.
//!
//! | Macro | Debug Assertions | Feature Required | WASM | Non-WASM |
//! |-------|------------------|------------------|------|----------|
//! | `debug_log!` | Required | `debug-hooks` | `console.debug` | `eprintln!` |
//! | `warn_log!` | Required | None | `console.warn` | `eprintln!` |
//!
//! ```ignore
//! use elkit_dom::{debug_log, warn_log};
//!
//! debug_log!("dispatching {} on {} element(s)", event_type, len);
//! warn_log!("invalid selector {:?}", selector);
//! ```

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::debug_1(&format!("[elkit] {}", format!($($arg)*)).into());
	}};
}

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", not(target_arch = "wasm32")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		eprintln!("[elkit][DEBUG] {}", format!($($arg)*));
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		if false {
			let _ = format!($($arg)*);
		}
	}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::warn_1(&format!("[elkit] {}", format!($($arg)*)).into());
	}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		eprintln!("[elkit][WARN] {}", format!($($arg)*));
	}};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		if false {
			let _ = format!($($arg)*);
		}
	}};
}

#[cfg(test)]
mod tests {
	use crate::{debug_log, warn_log};
	use rstest::rstest;

	#[rstest]
	fn test_logging_macros_compile() {
		debug_log!("Debug message: {}", 42);
		warn_log!("Warning message: {:?}", vec![1, 2, 3]);
	}

	#[rstest]
	fn test_logging_macros_no_args() {
		debug_log!("Simple debug");
		warn_log!("Simple warning");
	}
}
