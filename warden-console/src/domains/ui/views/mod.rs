pub mod admin;
pub mod header;
