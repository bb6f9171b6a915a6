use anyhow::Result;
use scrawl_engine::logging::{LoggingConfig, init_logging};

mod app;
mod scene;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    app::run()
}
