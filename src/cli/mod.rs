pub mod commands;
pub mod ui;
