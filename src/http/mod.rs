mod client;
mod executor;
mod target;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::build_client;
pub use executor::{Exchange, execute};
pub use target::{Scheme, Target};
