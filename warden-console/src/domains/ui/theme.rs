use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{button, container, text_input},
};

/// Dark console theme with a single accent colour
#[derive(Debug, Clone, Copy)]
pub struct ConsoleTheme;

impl ConsoleTheme {
    // Core colors
    pub const BACKGROUND: Color = Color::from_rgb(0.04, 0.04, 0.05);
    pub const ACCENT: Color = Color::from_rgb(0.20, 0.55, 0.95);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.30, 0.62, 1.0);

    // Surfaces
    pub const CARD_BG: Color = Color::from_rgb(0.1, 0.1, 0.1); // #1A1A1A
    pub const CARD_HOVER: Color = Color::from_rgb(0.15, 0.15, 0.15); // #262626
    pub const BORDER_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.2); // #333333
    pub const OVERLAY: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.75);

    // Text
    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.5, 0.5);

    // Status
    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.8, 0.4); // #00CC66
    pub const WARNING: Color = Color::from_rgb(1.0, 0.6, 0.0); // #FF9900
    pub const ERROR: Color = Color::from_rgb(1.0, 0.2, 0.2); // #FF3333

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Warden Dark", palette)
    }
}

#[derive(Debug)]
pub enum Container {
    Card,
    ErrorBox,
    Modal,
    ModalOverlay,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Card => |_| container::Style {
                text_color: Some(ConsoleTheme::TEXT_PRIMARY),
                background: Some(Background::Color(ConsoleTheme::CARD_BG)),
                border: Border {
                    color: ConsoleTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..container::Style::default()
            },
            Container::ErrorBox => |_| container::Style {
                text_color: Some(ConsoleTheme::ERROR),
                background: Some(Background::Color(Color::from_rgba(1.0, 0.2, 0.2, 0.1))),
                border: Border {
                    color: ConsoleTheme::ERROR,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..container::Style::default()
            },
            Container::Modal => |_| container::Style {
                text_color: Some(ConsoleTheme::TEXT_PRIMARY),
                background: Some(Background::Color(ConsoleTheme::CARD_BG)),
                border: Border {
                    color: ConsoleTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.6),
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 24.0,
                },
                ..container::Style::default()
            },
            Container::ModalOverlay => |_| container::Style {
                background: Some(Background::Color(ConsoleTheme::OVERLAY)),
                ..container::Style::default()
            },
        }
    }
}

#[derive(Debug)]
pub enum Button {
    Primary,
    Secondary,
    Danger,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => ConsoleTheme::ACCENT_HOVER,
                    button::Status::Disabled => ConsoleTheme::BORDER_COLOR,
                    _ => ConsoleTheme::ACCENT,
                };
                solid(background, ConsoleTheme::TEXT_PRIMARY)
            },
            Button::Secondary => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => ConsoleTheme::CARD_HOVER,
                    _ => ConsoleTheme::CARD_BG,
                };
                button::Style {
                    border: Border {
                        color: ConsoleTheme::BORDER_COLOR,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    ..solid(background, ConsoleTheme::TEXT_PRIMARY)
                }
            },
            Button::Danger => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => ConsoleTheme::ERROR,
                    _ => Color::from_rgba(1.0, 0.2, 0.2, 0.25),
                };
                solid(background, ConsoleTheme::TEXT_PRIMARY)
            },
        }
    }
}

fn solid(background: Color, text_color: Color) -> button::Style {
    button::Style {
        text_color,
        background: Some(Background::Color(background)),
        border: Border {
            color: background,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..button::Style::default()
    }
}

pub fn text_input_style(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let base = text_input::default(theme, status);
    text_input::Style {
        background: Background::Color(ConsoleTheme::BACKGROUND),
        border: Border {
            color: match status {
                text_input::Status::Focused { .. } => ConsoleTheme::ACCENT,
                _ => ConsoleTheme::BORDER_COLOR,
            },
            width: 1.0,
            radius: 6.0.into(),
        },
        ..base
    }
}
