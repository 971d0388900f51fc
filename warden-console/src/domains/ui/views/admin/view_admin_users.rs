use iced::widget::{
    Space, button, column, container, keyed_column, mouse_area, opaque, row, scrollable, stack,
    text,
};
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::auth::permissions::{StatePermissionExt, UserAdminCapabilities};
use crate::domains::ui::theme::{self, ConsoleTheme};
use crate::domains::ui::views::admin::user_form::view_user_form;
use crate::domains::user_management::messages::Message;
use crate::domains::user_management::state::{SyncState, UserEntry};
use crate::state::State;

pub fn view_admin_users(state: &State) -> Element<'_, DomainMessage> {
    // Capabilities are evaluated once per render from the current actor
    let capabilities = state.permission_checker().user_admin_capabilities();
    if !capabilities.can_get_users {
        return notice("You do not have permission to view user management.");
    }

    let screen = &state.domains.user_management.state;

    let mut header = row![
        text("Manage users")
            .size(20)
            .color(ConsoleTheme::TEXT_PRIMARY),
        Space::new().width(Length::Fill),
    ]
    .align_y(iced::Alignment::Center);

    if capabilities.can_add_user {
        header = header.push(
            button("Add new user")
                .style(theme::Button::Primary.style())
                .padding([8, 14])
                .on_press(DomainMessage::from(Message::OpenCreate)),
        );
    }

    let mut content = column![
        container(header)
            .style(theme::Container::Card.style())
            .padding(16)
            .width(Length::Fill),
    ]
    .spacing(12)
    .padding(20);

    if let Some(error) = screen.error() {
        content = content.push(
            container(text(error).size(14))
                .style(theme::Container::ErrorBox.style())
                .padding([10, 14])
                .width(Length::Fill),
        );
    }

    let body: Element<'_, DomainMessage> = if screen.is_loading() {
        container(
            text("Loading users...")
                .size(16)
                .color(ConsoleTheme::TEXT_SECONDARY),
        )
        .padding(20)
        .center_x(Length::Fill)
        .into()
    } else if screen.is_empty() {
        container(
            text("There are no users")
                .size(16)
                .color(ConsoleTheme::TEXT_SECONDARY),
        )
        .padding(20)
        .center_x(Length::Fill)
        .into()
    } else {
        let rows = keyed_column(
            screen
                .entries()
                .iter()
                .map(|entry| (entry.key.get(), user_row(entry, capabilities))),
        )
        .spacing(8);

        scrollable(container(rows).padding(10).width(Length::Fill))
            .height(Length::Fill)
            .into()
    };
    content = content.push(body);

    let base: Element<'_, DomainMessage> = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    match screen.form() {
        Some(form) => modal(
            base,
            view_user_form(form, screen.editing_user()),
            DomainMessage::from(Message::CloseModal),
        ),
        None => base,
    }
}

fn user_row(entry: &UserEntry, capabilities: UserAdminCapabilities) -> Element<'_, DomainMessage> {
    let user = &entry.user;

    let email = user.email.as_deref().unwrap_or("-");
    let role = user.role.as_deref().unwrap_or("-");
    let created = user
        .created_at
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());

    let status = match entry.sync {
        SyncState::Synced => text(""),
        SyncState::Pending => text("saving").size(12).color(ConsoleTheme::TEXT_DIMMED),
        SyncState::Unsynced => text("not saved").size(12).color(ConsoleTheme::WARNING),
        SyncState::Removing => text("removing").size(12).color(ConsoleTheme::TEXT_DIMMED),
    };

    let mut actions = row![].spacing(8).align_y(iced::Alignment::Center);
    let removing = entry.sync == SyncState::Removing;
    if capabilities.can_edit_user && !removing {
        actions = actions.push(
            button("Edit")
                .style(theme::Button::Secondary.style())
                .padding([6, 10])
                .on_press(DomainMessage::from(Message::BeginEdit(user.id.clone()))),
        );
    }
    if capabilities.can_remove_user && !removing {
        actions = actions.push(
            button("Remove")
                .style(theme::Button::Danger.style())
                .padding([6, 10])
                .on_press(DomainMessage::from(Message::RemoveUser(user.id.clone()))),
        );
    }

    container(
        row![
            text(&user.name).size(16).width(Length::FillPortion(3)),
            text(email)
                .size(14)
                .color(ConsoleTheme::TEXT_SECONDARY)
                .width(Length::FillPortion(3)),
            text(role)
                .size(14)
                .color(ConsoleTheme::TEXT_SECONDARY)
                .width(Length::FillPortion(2)),
            text(created)
                .size(14)
                .color(ConsoleTheme::TEXT_SECONDARY)
                .width(Length::FillPortion(2)),
            status,
            actions,
        ]
        .align_y(iced::Alignment::Center)
        .spacing(10),
    )
    .style(theme::Container::Card.style())
    .padding([10, 12])
    .width(Length::Fill)
    .into()
}

fn notice(message: &str) -> Element<'_, DomainMessage> {
    container(
        text(message)
            .size(16)
            .color(ConsoleTheme::TEXT_SECONDARY),
    )
    .padding(20)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Layer `content` over `base`; clicking outside the content sends `on_blur`.
fn modal<'a>(
    base: Element<'a, DomainMessage>,
    content: Element<'a, DomainMessage>,
    on_blur: DomainMessage,
) -> Element<'a, DomainMessage> {
    stack![
        base,
        opaque(
            mouse_area(
                container(opaque(content))
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
                    .style(theme::Container::ModalOverlay.style())
            )
            .on_press(on_blur)
        )
    ]
    .into()
}
