use iced::Task;
use log::{debug, error, info, warn};

use crate::{
    common::messages::DomainMessage,
    domains::auth::{ActorStatus, messages::Message},
    domains::user_management::messages::Message as UserManagementMessage,
    state::State,
};

/// Handle auth domain messages
pub fn update_auth(state: &mut State, message: Message) -> Task<DomainMessage> {
    debug!("Auth update: {}", message.name());

    match message {
        Message::ResolveActor => {
            let service = state.domains.auth.state.session_service.clone();
            state.domains.auth.state.status = ActorStatus::Resolving;
            Task::perform(
                async move { service.current_actor().await.map_err(|e| e.to_string()) },
                |result| DomainMessage::from(Message::ActorResolved(result)),
            )
        }

        Message::ActorResolved(result) => match result {
            Ok(Some(actor)) => {
                info!("[Auth] Acting as {} ({})", actor.username, actor.user_id);
                state.domains.auth.state.status = ActorStatus::SignedIn(actor);
                Task::done(DomainMessage::from(UserManagementMessage::Mount))
            }
            Ok(None) => {
                warn!("[Auth] No operator is signed in");
                state.domains.auth.state.status = ActorStatus::SignedOut;
                Task::none()
            }
            Err(err) => {
                error!("[Auth] Failed to resolve operator: {}", err);
                state.domains.auth.state.status = ActorStatus::Failed(err);
                Task::none()
            }
        },
    }
}
