pub mod command_handler;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod input_handler;
pub mod io_service;
pub mod shortcut_manager;
pub mod state;
pub mod ui_state;
pub mod view_state;
