pub mod session;
pub mod user_management;
