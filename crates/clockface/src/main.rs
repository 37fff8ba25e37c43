use clockface_engine::logging::{init_logging, LoggingConfig};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = clockface::draw_clock() {
        log::error!("clock failed: {e:#}");
        std::process::exit(1);
    }
}
