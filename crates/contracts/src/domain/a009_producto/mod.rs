pub mod aggregate;
pub mod form;
pub mod imagenes;

pub use aggregate::*;
