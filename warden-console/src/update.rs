use iced::Task;

use crate::common::messages::DomainMessage;
use crate::domains::auth::update::update_auth;
use crate::domains::user_management::update::update_user_management;
use crate::state::State;

pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    match message {
        DomainMessage::Auth(msg) => update_auth(state, msg),
        DomainMessage::UserManagement(msg) => update_user_management(state, msg),
        DomainMessage::NoOp => Task::none(),
    }
}
