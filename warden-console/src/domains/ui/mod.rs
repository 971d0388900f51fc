pub mod theme;
pub mod views;
