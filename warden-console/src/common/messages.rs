//! Top-level message routing between domains.

use crate::domains::{auth, user_management};

#[derive(Clone, Debug)]
pub enum DomainMessage {
    Auth(auth::messages::Message),
    UserManagement(user_management::messages::Message),
    NoOp,
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auth(msg) => msg.name(),
            Self::UserManagement(msg) => msg.name(),
            Self::NoOp => "NoOp",
        }
    }
}

impl From<auth::messages::Message> for DomainMessage {
    fn from(msg: auth::messages::Message) -> Self {
        DomainMessage::Auth(msg)
    }
}

impl From<user_management::messages::Message> for DomainMessage {
    fn from(msg: user_management::messages::Message) -> Self {
        DomainMessage::UserManagement(msg)
    }
}
