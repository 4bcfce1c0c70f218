#[macro_use] pub mod core;
#[macro_use] pub mod types;

pub mod cli;
pub mod formats;
pub mod statement;
pub mod time;
