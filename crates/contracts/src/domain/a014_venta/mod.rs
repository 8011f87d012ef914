pub mod aggregate;
pub mod form;
pub mod lineas;

pub use aggregate::*;
