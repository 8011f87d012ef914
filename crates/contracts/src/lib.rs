//! Contratos compartidos del panel de administración del taller.
//!
//! Todo lo que no depende del navegador vive aquí: DTOs, descriptores de
//! recursos REST, esquemas de formularios, caché de consultas y agregados de
//! reportes. El crate compila y se prueba en el host.

pub mod domain;
pub mod reports;
pub mod shared;
pub mod system;
