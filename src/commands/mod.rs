pub mod deploy;
pub mod quote;
pub mod swap;
