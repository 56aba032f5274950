pub mod consts;
pub mod errors;
pub mod hashing;
pub mod filter;
pub mod estimate;
pub mod config;

pub use config::FilterConfig;
pub use errors::{FilterError, Result};
pub use filter::{FilterParams, WordFilter};
pub use hashing::{expand, expand_raw};
