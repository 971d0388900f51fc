use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Element, Length};
use warden_model::User;

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme::{self, ConsoleTheme};
use crate::domains::user_management::messages::Message;
use crate::domains::user_management::state::UserFormState;

/// Add/edit form shown inside the modal. `editing` is the user being
/// edited, or `None` when adding.
pub fn view_user_form<'a>(
    form: &'a UserFormState,
    editing: Option<&'a User>,
) -> Element<'a, DomainMessage> {
    let title = match editing {
        Some(user) => format!("Edit {}", user.name),
        None => "Add new user".to_string(),
    };

    let submit = DomainMessage::from(Message::FormSubmit);

    let fields = column![
        labelled(
            "Name",
            text_input("Full name", &form.name)
                .on_input(|value| DomainMessage::from(Message::FormNameChanged(value)))
                .on_submit(submit.clone())
                .style(theme::text_input_style)
                .padding(10)
                .into(),
        ),
        labelled(
            "Email",
            text_input("name@example.com", &form.email)
                .on_input(|value| DomainMessage::from(Message::FormEmailChanged(value)))
                .on_submit(submit.clone())
                .style(theme::text_input_style)
                .padding(10)
                .into(),
        ),
        labelled(
            "Role",
            text_input("user, manager or admin", &form.role)
                .on_input(|value| DomainMessage::from(Message::FormRoleChanged(value)))
                .on_submit(submit.clone())
                .style(theme::text_input_style)
                .padding(10)
                .into(),
        ),
    ]
    .spacing(12);

    let actions = row![
        Space::new().width(Length::Fill),
        button("Cancel")
            .style(theme::Button::Secondary.style())
            .padding([8, 14])
            .on_press(DomainMessage::from(Message::CloseModal)),
        button("Save")
            .style(theme::Button::Primary.style())
            .padding([8, 14])
            .on_press_maybe(form.can_submit().then_some(submit)),
    ]
    .spacing(8);

    container(
        column![
            text(title).size(20).color(ConsoleTheme::TEXT_PRIMARY),
            fields,
            actions,
        ]
        .spacing(18),
    )
    .style(theme::Container::Modal.style())
    .padding(24)
    .width(Length::Fixed(440.0))
    .into()
}

fn labelled<'a>(label: &'a str, input: Element<'a, DomainMessage>) -> Element<'a, DomainMessage> {
    column![
        text(label).size(13).color(ConsoleTheme::TEXT_SECONDARY),
        input,
    ]
    .spacing(4)
    .into()
}
