mod cell;
mod parser;
mod sheet;

pub use self::cell::*;
pub use self::parser::*;
pub use self::sheet::*;
