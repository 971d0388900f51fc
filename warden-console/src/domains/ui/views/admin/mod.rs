//! Admin views: the users screen and its add/edit form

pub mod user_form;
pub mod view_admin_users;

pub use view_admin_users::view_admin_users;
