pub mod loader;

pub use loader::{load_policy, PolicyError, PolicyLoader};
