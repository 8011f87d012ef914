pub mod aggregate;
pub mod cascade;
pub mod form;
pub mod subcategoria;

pub use aggregate::*;
pub use subcategoria::*;
