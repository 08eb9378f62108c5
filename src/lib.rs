pub mod apple;
pub mod audio;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod session;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
