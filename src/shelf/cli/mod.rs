mod args;
mod commands;
mod render;

pub use commands::run;
