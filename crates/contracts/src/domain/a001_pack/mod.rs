pub mod aggregate;

pub use aggregate::{Pack, PackId, PackStatus};
