pub mod types;

pub use types::VulndeckError;
