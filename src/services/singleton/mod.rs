pub mod singleton_service;
pub mod stateful_service;

pub use singleton_service::*;
pub use stateful_service::*;
