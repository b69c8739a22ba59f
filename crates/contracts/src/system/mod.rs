pub mod auth;
pub mod navigation;
pub mod settings;
pub mod users;
