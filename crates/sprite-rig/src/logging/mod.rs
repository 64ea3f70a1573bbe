//! Logger initialization.
//!
//! The crate logs sparse diagnostics through the `log` facade (registry and
//! list mutation at `debug`/`trace` level) and never initializes a logger on
//! its own; binaries opt in via [`init_logging`].

mod init;

pub use init::init_logging;
