//! Macros for logging and debug assertions. The `track_debug_assert_*!()` macros are compiled out
//! during release builds, so they can be used for asserting additional invariants in debug builds.
//! All of these are thin wrappers around the `log` crate's facade, so the host application decides
//! where the output ends up.

// NOTE: Exporting macros in Rust is a bit weird. `#[macro_export]` causes them to be exported to
//       the crate root, but that makes it difficult to include just the macros without using
//       `#[macro_use] extern crate trackbar;`. That's why the macros are also re-exported from
//       this module.

/// Write something to the logger at the info level.
#[macro_export]
macro_rules! track_log {
    ($($args:tt)*) => (
        $crate::log::info!($($args)*)
    );
}
#[doc(inline)]
pub use track_log;

/// Similar to `track_log!()`, but less subtle. Used for printing warnings.
#[macro_export]
macro_rules! track_warn {
    ($($args:tt)*) => (
        $crate::log::warn!($($args)*)
    );
}
#[doc(inline)]
pub use track_warn;

/// Similar to `track_log!()`, but more scream-y. Used for printing fatal errors.
#[macro_export]
macro_rules! track_error {
    ($($args:tt)*) => (
        $crate::log::error!($($args)*)
    );
}
#[doc(inline)]
pub use track_error;

/// The same as `track_log!()`, but at the trace level. Drag interactions go through this since
/// they fire on every pointer movement.
#[macro_export]
macro_rules! track_trace {
    ($($args:tt)*) => (
        $crate::log::trace!($($args)*)
    );
}
#[doc(inline)]
pub use track_trace;

/// A `debug_assert!()` analogue that prints the error with line number information instead of
/// panicking. During tests this is upgraded to a regular panicking `debug_assert!()`.
#[macro_export]
macro_rules! track_debug_assert {
    ($cond:expr $(,)?) => (
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        if cfg!(test) {
           debug_assert!($cond);
        } else if cfg!(debug_assertions) && !$cond {
            $crate::log::warn!(concat!("Debug assertion failed: ", stringify!($cond)));
        }
    );
    ($cond:expr, $format:expr $(, $($args:tt)*)?) => (
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        if cfg!(test) {
           debug_assert!($cond, $format, $($($args)*)?);
        } else if cfg!(debug_assertions) && !$cond {
            $crate::log::warn!(concat!("Debug assertion failed: ", stringify!($cond), ", ", $format), $($($args)*)?);
        }
    );
}
#[doc(inline)]
pub use track_debug_assert;

/// An unconditional debug assertion failure, for if the condition has already been checked
/// elsewhere. See [`track_debug_assert!()`] for more information.
#[macro_export]
macro_rules! track_debug_assert_failure {
    () => (
        if cfg!(test) {
           debug_assert!(false, "Debug assertion failed");
        } else if cfg!(debug_assertions) {
            $crate::log::warn!("Debug assertion failed");
        }
    );
    ($format:expr $(, $($args:tt)*)?) => (
        if cfg!(test) {
           debug_assert!(false, concat!("Debug assertion failed: ", $format), $($($args)*)?);
        } else if cfg!(debug_assertions) {
            $crate::log::warn!(concat!("Debug assertion failed: ", $format), $($($args)*)?);
        }
    );
}
#[doc(inline)]
pub use track_debug_assert_failure;

/// A `debug_assert_eq!()` analogue that prints the error with line number information instead of
/// panicking. See [`track_debug_assert!()`] for more information.
#[macro_export]
macro_rules! track_debug_assert_eq {
    ($left:expr, $right:expr $(,)?) => (
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        if cfg!(test) {
           debug_assert_eq!($left, $right);
        } else if cfg!(debug_assertions) && $left != $right {
            $crate::log::warn!(concat!("Debug assertion failed: ", stringify!($left), " != ", stringify!($right)));
        }
    );
    ($left:expr, $right:expr, $format:expr $(, $($args:tt)*)?) => (
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        if cfg!(test) {
           debug_assert_eq!($left, $right, $format, $($($args)*)?);
        } else if cfg!(debug_assertions) && $left != $right {
            $crate::log::warn!(concat!("Debug assertion failed: ", stringify!($left), " != ", stringify!($right), ", ", $format), $($($args)*)?);
        }
    );
}
#[doc(inline)]
pub use track_debug_assert_eq;
