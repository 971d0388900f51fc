use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use warden_console::app::{self, AppConfig, CliArgs};

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("warden_console", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let args = CliArgs::parse();
    let config = AppConfig::load(&args)?;
    log::info!("Loaded configuration: {:?}", config);

    let services = app::build_services(&config)?;
    app::application(config, services).run()?;
    Ok(())
}
