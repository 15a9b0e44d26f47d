pub mod cli;
pub mod config;
pub mod logging;

pub mod checker;
pub mod probe;
pub mod retry;
