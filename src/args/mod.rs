mod cli;
mod defaults;
mod parsers;
mod types;


pub use cli::CliArgs;
pub use defaults::DEFAULT_DNS_POOL;
pub use parsers::parse_delay;
pub use types::{PositiveU64, PositiveUsize};
