mod config;
mod presenter;
mod session;

pub use config::*;
pub use presenter::*;
pub use session::*;
