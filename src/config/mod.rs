mod loader;
mod types;

pub use types::Config;
