use serde::{Deserialize, Serialize};

use crate::domain::default_true;
use crate::shared::config::DEFAULT_TIENDA_ID;
use crate::shared::resource::{CachePolicy, Resource};

/// Punto de venta físico de una tienda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sucursal {
    pub id: i64,
    pub nombre: String,
    pub direccion: String,
    #[serde(default)]
    pub telefono: Option<String>,
    pub tienda_id: i64,
    #[serde(default = "default_true")]
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSucursalDto {
    pub nombre: String,
    pub direccion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    pub tienda_id: i64,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSucursalDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tienda_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl From<CreateSucursalDto> for UpdateSucursalDto {
    fn from(dto: CreateSucursalDto) -> Self {
        Self {
            nombre: Some(dto.nombre),
            direccion: Some(dto.direccion),
            telefono: Some(dto.telefono),
            tienda_id: Some(dto.tienda_id),
            activo: Some(dto.activo),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SucursalFilters {
    pub tienda_id: i64,
}

impl Default for SucursalFilters {
    fn default() -> Self {
        Self {
            tienda_id: DEFAULT_TIENDA_ID,
        }
    }
}

pub struct Sucursales;

impl Resource for Sucursales {
    type Entity = Sucursal;
    type CreateDto = CreateSucursalDto;
    type UpdateDto = UpdateSucursalDto;
    type ListParams = SucursalFilters;

    const KEY: &'static str = "sucursales";
    const PATH: &'static str = "/sucursales";
    const POLICY: CachePolicy = CachePolicy::CATALOG;
    const DEPENDENTS: &'static [&'static str] = &["inventario-sucursal", "reporte-inventario"];
    const ELEMENT_NAME: &'static str = "Sucursal";
    const LIST_NAME: &'static str = "Sucursales";

    fn id(entity: &Sucursal) -> i64 {
        entity.id
    }

    fn label(entity: &Sucursal) -> String {
        entity.nombre.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_scoped_to_the_default_store() {
        assert_eq!(
            Sucursales::list_path(&SucursalFilters::default()),
            format!("/sucursales?tiendaId={}", DEFAULT_TIENDA_ID)
        );
    }
}
