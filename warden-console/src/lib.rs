//! Warden console: a desktop screen for listing, adding, editing and
//! removing the users of a Warden deployment.

pub mod app;
pub mod common;
pub mod domains;
pub mod infrastructure;
pub mod state;
pub mod update;
pub mod view;
