pub mod api;
pub mod auth;
pub mod date_utils;
pub mod export;
pub mod file_utils;
pub mod form;
pub mod hooks;
pub mod icons;
pub mod list;
pub mod lookups;
pub mod modal;
pub mod number_format;
pub mod page_frame;
pub mod query_client;
