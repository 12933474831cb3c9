pub mod apim;
pub mod args;
pub mod cli;
pub mod config;
pub mod terminal;
