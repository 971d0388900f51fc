use iced::Task;
use log::{debug, info, warn};

use crate::{
    common::messages::DomainMessage,
    domains::auth::permissions::StatePermissionExt,
    domains::user_management::{
        effects,
        messages::Message,
        state::{ModalState, ReconcileOutcome, RemoveAction, SubmitOutcome},
    },
    state::State,
};

/// Handle user management domain messages
pub fn update_user_management(state: &mut State, message: Message) -> Task<DomainMessage> {
    debug!("User management update: {}", message.name());

    let capabilities = state.permission_checker().user_admin_capabilities();
    let domain = &mut state.domains.user_management;
    let service = domain.user_admin_service.clone();
    let screen = &mut domain.state;

    match message {
        Message::Mount => {
            if !capabilities.can_get_users {
                info!("Current actor may not list users; skipping fetch");
                return Task::none();
            }
            if !screen.begin_load() {
                return Task::none();
            }
            info!("Loading users from server");
            Task::perform(effects::load_users(service), DomainMessage::from)
        }

        Message::UsersLoaded(result) => {
            screen.apply_loaded(result);
            Task::none()
        }

        Message::OpenCreate => {
            if !capabilities.can_add_user {
                warn!("Ignoring add request: actor lacks permission");
                return Task::none();
            }
            screen.open_create();
            Task::none()
        }

        Message::BeginEdit(user_id) => {
            if !capabilities.can_edit_user {
                warn!("Ignoring edit request for {}: actor lacks permission", user_id);
                return Task::none();
            }
            screen.begin_edit(&user_id);
            Task::none()
        }

        Message::CloseModal => {
            screen.close_modal();
            Task::none()
        }

        Message::FormNameChanged(name) => {
            screen.update_form(|form| form.name = name);
            Task::none()
        }

        Message::FormEmailChanged(email) => {
            screen.update_form(|form| form.email = email);
            Task::none()
        }

        Message::FormRoleChanged(role) => {
            screen.update_form(|form| form.role = role);
            Task::none()
        }

        Message::FormSubmit => {
            let permitted = match screen.modal() {
                ModalState::Open { editing: Some(_), .. } => capabilities.can_edit_user,
                ModalState::Open { editing: None, .. } => capabilities.can_add_user,
                ModalState::Closed => return Task::none(),
            };
            if !permitted {
                warn!("Rejecting form submit: actor lacks permission");
                screen.close_modal();
                return Task::none();
            }

            match screen.submit_form() {
                None => {
                    debug!("Form not submittable yet");
                    Task::none()
                }
                Some(SubmitOutcome::Edited { applied }) => {
                    if applied {
                        info!("Applied local edit");
                    }
                    Task::none()
                }
                Some(SubmitOutcome::Created { key, draft }) => {
                    info!("Adding user (row {})", key.get());
                    Task::perform(effects::create_user(service, key, draft), DomainMessage::from)
                }
            }
        }

        Message::UserCreated(key, result) => match screen.reconcile_created(key, result) {
            ReconcileOutcome::Orphaned(user_id) => {
                info!("Removing orphaned user {} from server", user_id);
                Task::perform(effects::remove_orphan(service, user_id), DomainMessage::from)
            }
            ReconcileOutcome::Confirmed | ReconcileOutcome::Failed => Task::none(),
        },

        Message::RemoveUser(user_id) => {
            if !capabilities.can_remove_user {
                warn!("Ignoring remove request for {}: actor lacks permission", user_id);
                return Task::none();
            }
            match screen.request_remove(&user_id) {
                RemoveAction::Remote(user_id) => {
                    info!("Removing user {}", user_id);
                    Task::perform(effects::remove_user(service, user_id), DomainMessage::from)
                }
                RemoveAction::LocalOnly => {
                    info!("Dropped unsaved user {} locally", user_id);
                    Task::none()
                }
                RemoveAction::AlreadyRemoving => {
                    debug!("Remove of {} already in flight", user_id);
                    Task::none()
                }
                RemoveAction::NotFound => {
                    debug!("Remove requested for unknown user {}", user_id);
                    Task::none()
                }
            }
        }

        Message::UserRemoved(user_id, result) => {
            screen.apply_removed(&user_id, result);
            Task::none()
        }

        Message::OrphanRemoved(user_id, result) => {
            match result {
                Ok(()) => info!("Orphaned user {} removed", user_id),
                Err(error) => warn!("Failed to remove orphaned user {}: {}", user_id, error),
            }
            Task::none()
        }
    }
}
