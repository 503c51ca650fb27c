#![doc(test(attr(deny(warnings))))]

//! Money Render turns storefront `Money` values (whole units plus nanos) into
//! display strings, using per-currency rules such as the Brazilian Real's
//! `R$ 1.234,56` layout.
//!
//! ```
//! use money_render::currency::{render, Money};
//!
//! assert_eq!(render(&Money::new("BRL", 1234, 560_000_000)), "R$ 1.234,56");
//! assert_eq!(render(&Money::new("USD", 1234, 560_000_000)), "$1234.56");
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Money Render tracing initialized.");
    });
}
