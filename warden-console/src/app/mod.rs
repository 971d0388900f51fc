use std::sync::Arc;

use iced::{Application, Font, Program as IcedProgram, Settings, Theme};

use crate::common::messages::DomainMessage;
use crate::state::{Services, State};
use crate::{update, view};

pub mod bootstrap;
pub mod config;

pub use bootstrap::build_services;
pub use config::{AppConfig, CliArgs, ConfigError};

/// Build the Warden console application.
pub fn application(
    config: AppConfig,
    services: Services,
) -> Application<impl IcedProgram<State = State, Message = DomainMessage, Theme = Theme>> {
    let config = Arc::new(config);

    iced::application(
        move || bootstrap::runtime_boot(Arc::clone(&config), services.clone()),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Warden - Admin users")
    .theme(app_theme)
    .window(iced::window::Settings {
        size: iced::Size::new(1024.0, 680.0),
        resizable: true,
        decorations: true,
        ..Default::default()
    })
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("warden-console".to_string());
    settings.antialiasing = true;
    settings.default_font = Font::MONOSPACE;
    settings
}

fn app_theme(_: &State) -> Theme {
    crate::domains::ui::theme::ConsoleTheme::theme()
}
