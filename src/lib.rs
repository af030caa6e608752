#![doc(test(attr(deny(warnings))))]

//! Survey Core offers the form records, wizard controller, and
//! validation primitives that power the organizational survey
//! data-collection workflows and CLIs.

pub mod cli;
pub mod config;
pub mod errors;
pub mod report;
pub mod schema;
pub mod session;
pub mod submit;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Survey Core tracing initialized.");
    });
}
