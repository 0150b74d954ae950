pub mod error;
pub mod quote;
pub mod swap;

pub use error::ResolverError;
pub use quote::PathQuote;
pub use swap::{deadline_in, SwapRequest};
