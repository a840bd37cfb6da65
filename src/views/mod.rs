pub mod app;
pub mod alert;
pub mod login;
pub mod shell;
pub mod pages;
pub mod dashboard;
pub mod resources;
pub mod dialog;
pub mod donation_form;
pub mod map;

pub use app::{after_mount, render_app};
pub use login::render_login;
pub use shell::render_shell;
