use iced::widget::{Space, container, row, text};
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::auth::ActorStatus;
use crate::domains::ui::theme::{self, ConsoleTheme};
use crate::state::State;

pub fn view_header(state: &State) -> Element<'_, DomainMessage> {
    let who = match &state.domains.auth.state.status {
        ActorStatus::SignedIn(actor) => format!("Signed in as {}", actor.username),
        ActorStatus::Resolving => "Checking session...".to_string(),
        ActorStatus::SignedOut | ActorStatus::Failed(_) => "Not signed in".to_string(),
    };

    container(
        row![
            text("Admin users")
                .size(22)
                .color(ConsoleTheme::TEXT_PRIMARY),
            Space::new().width(Length::Fill),
            text(who).size(14).color(ConsoleTheme::TEXT_SECONDARY),
        ]
        .align_y(iced::Alignment::Center),
    )
    .style(theme::Container::Card.style())
    .padding([14, 20])
    .width(Length::Fill)
    .into()
}
