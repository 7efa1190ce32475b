pub mod framework;
pub mod gui;
pub mod palette_panel;
pub mod toolbar;
