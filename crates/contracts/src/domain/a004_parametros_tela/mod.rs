pub mod aggregate;
pub mod consumo;
pub mod form;

pub use aggregate::*;
