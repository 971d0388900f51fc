use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::auth::ActorStatus;
use crate::domains::ui::theme::ConsoleTheme;
use crate::domains::ui::views::admin::view_admin_users;
use crate::domains::ui::views::header::view_header;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let body = match &state.domains.auth.state.status {
        ActorStatus::SignedIn(_) => view_admin_users(state),
        ActorStatus::Resolving => status_notice("Checking your session...".to_string()),
        ActorStatus::SignedOut => status_notice("You are not signed in.".to_string()),
        ActorStatus::Failed(error) => {
            status_notice(format!("Could not verify your session: {error}"))
        }
    };

    column![view_header(state), body]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn status_notice<'a>(message: String) -> Element<'a, DomainMessage> {
    container(text(message).size(16).color(ConsoleTheme::TEXT_SECONDARY))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
