pub mod admin;
pub mod fields;
pub mod header;
pub mod password_modal;
pub mod user;
