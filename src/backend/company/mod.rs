//! Company Module
//!
//! Internal company endpoints mounted under `/companyapis`.

pub mod handlers;

pub use handlers::*;
