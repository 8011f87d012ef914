use serde::{Deserialize, Serialize};

use crate::domain::default_true;
use crate::shared::resource::{CachePolicy, Resource};

/// Proveedor de telas e insumos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proveedor {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub ruc: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub contacto: Option<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProveedorDto {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacto: Option<String>,
    pub activo: bool,
}

/// Solo se envían los campos presentes (PATCH parcial)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProveedorDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacto: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl From<CreateProveedorDto> for UpdateProveedorDto {
    fn from(dto: CreateProveedorDto) -> Self {
        Self {
            nombre: Some(dto.nombre),
            ruc: Some(dto.ruc),
            telefono: Some(dto.telefono),
            email: Some(dto.email),
            direccion: Some(dto.direccion),
            contacto: Some(dto.contacto),
            activo: Some(dto.activo),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProveedorFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

pub struct Proveedores;

impl Resource for Proveedores {
    type Entity = Proveedor;
    type CreateDto = CreateProveedorDto;
    type UpdateDto = UpdateProveedorDto;
    type ListParams = ProveedorFilters;

    const KEY: &'static str = "proveedores";
    const PATH: &'static str = "/proveedores";
    const POLICY: CachePolicy = CachePolicy::CATALOG;
    const DEPENDENTS: &'static [&'static str] = &["telas", "inventario-telas"];
    const ELEMENT_NAME: &'static str = "Proveedor";
    const LIST_NAME: &'static str = "Proveedores";

    fn id(entity: &Proveedor) -> i64 {
        entity.id
    }

    fn label(entity: &Proveedor) -> String {
        entity.nombre.clone()
    }
}
