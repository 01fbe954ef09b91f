//! Tracing support for the traversal and shortest-path engines.
//!
//! This module provides tracing functionality when the `tracing` feature is
//! enabled, and provides no-op implementations when it's disabled.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    /// Installs a `fmt` subscriber writing through the test harness.  Safe to
    /// call any number of times; only the first call has an effect, and an
    /// already-installed global subscriber is left alone.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .with_test_writer()
                .try_init();
        });
    }

    pub(crate) use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    // Provide no-op macro replacements for the tracing macros we use.
    macro_rules! info_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! trace {
        ($($args:tt)*) => {{}};
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::init_tracing;
#[cfg(feature = "tracing")]
pub(crate) use enabled::{debug, info_span, trace};

#[cfg(not(feature = "tracing"))]
pub use disabled::{NoOpSpan, NoOpSpanGuard, init_tracing};
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, info_span, trace};
