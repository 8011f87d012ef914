pub mod aggregate;
pub mod form;
pub mod importe;

pub use aggregate::*;
