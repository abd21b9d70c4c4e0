mod base;
mod interface;
mod middleware;

pub(crate) use base::*;
pub use base::ConfigError;
pub(crate) use interface::*;
pub use middleware::GeneralParser;
