//! Administración del panel (usuarios).

pub mod usuarios;
