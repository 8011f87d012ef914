pub mod config;
pub mod debounce;
pub mod error;
pub mod form;
pub mod page;
pub mod query;
pub mod resource;
