pub mod core;
pub mod history;
pub mod tools;
pub mod render;
pub mod app;
pub mod ui;

rust_i18n::i18n!("locales", fallback = "en");
