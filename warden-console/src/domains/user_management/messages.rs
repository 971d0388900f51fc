use warden_model::{User, UserId};

use super::state::LocalKey;

#[derive(Clone, Debug)]
pub enum Message {
    // Initial fetch
    Mount,
    UsersLoaded(Result<Vec<User>, String>),

    // Modal
    OpenCreate,
    BeginEdit(UserId),
    CloseModal,

    // Form
    FormNameChanged(String),
    FormEmailChanged(String),
    FormRoleChanged(String),
    FormSubmit,
    UserCreated(LocalKey, Result<User, String>),

    // Removal
    RemoveUser(UserId),
    UserRemoved(UserId, Result<(), String>),
    OrphanRemoved(UserId, Result<(), String>),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mount => "UserManagement::Mount",
            Self::UsersLoaded(_) => "UserManagement::UsersLoaded",

            Self::OpenCreate => "UserManagement::OpenCreate",
            Self::BeginEdit(_) => "UserManagement::BeginEdit",
            Self::CloseModal => "UserManagement::CloseModal",

            Self::FormNameChanged(_) => "UserManagement::FormNameChanged",
            Self::FormEmailChanged(_) => "UserManagement::FormEmailChanged",
            Self::FormRoleChanged(_) => "UserManagement::FormRoleChanged",
            Self::FormSubmit => "UserManagement::FormSubmit",
            Self::UserCreated(_, _) => "UserManagement::UserCreated",

            Self::RemoveUser(_) => "UserManagement::RemoveUser",
            Self::UserRemoved(_, _) => "UserManagement::UserRemoved",
            Self::OrphanRemoved(_, _) => "UserManagement::OrphanRemoved",
        }
    }
}
