pub mod assets;
pub mod history;
pub mod macros;
pub mod snapshot;
pub mod supply;

pub mod util;
