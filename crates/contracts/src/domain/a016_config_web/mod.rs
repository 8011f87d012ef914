pub mod aggregate;
pub mod banners;
pub mod form;

pub use aggregate::*;
