pub mod app;
pub mod config;
pub mod setup_form;
pub mod timer;
pub mod ui;
