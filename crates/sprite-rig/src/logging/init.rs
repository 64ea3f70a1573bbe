use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` once; later calls are ignored.
///
/// Filter precedence: explicit `filter` (env_logger syntax, e.g.
/// `"sprite_rig=debug"`), then the `RUST_LOG` environment variable, then a
/// `warn` default.
///
/// Intended usage is early in `main`; libraries should not call this.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
