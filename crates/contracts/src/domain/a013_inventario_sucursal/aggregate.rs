use serde::{Deserialize, Serialize};

use crate::domain::Existencia;
use crate::shared::resource::{CachePolicy, Resource};

/// Stock de un producto en una sucursal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventarioSucursal {
    pub id: i64,
    pub sucursal_id: i64,
    pub producto_id: i64,
    pub stock: i64,
    #[serde(default)]
    pub stock_minimo: i64,
    #[serde(default)]
    pub ubicacion: Option<String>,
}

impl Existencia for InventarioSucursal {
    fn producto_id(&self) -> i64 {
        self.producto_id
    }

    fn stock(&self) -> i64 {
        self.stock
    }

    fn stock_minimo(&self) -> i64 {
        self.stock_minimo
    }

    fn ubicacion_id(&self) -> i64 {
        self.sucursal_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventarioSucursalDto {
    pub sucursal_id: i64,
    pub producto_id: i64,
    pub stock: i64,
    pub stock_minimo: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventarioSucursalDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producto_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_minimo: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<Option<String>>,
}

impl From<CreateInventarioSucursalDto> for UpdateInventarioSucursalDto {
    fn from(dto: CreateInventarioSucursalDto) -> Self {
        Self {
            producto_id: Some(dto.producto_id),
            stock: Some(dto.stock),
            stock_minimo: Some(dto.stock_minimo),
            ubicacion: Some(dto.ubicacion),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventarioSucursalFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sucursal_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producto_id: Option<i64>,
}

pub struct InventariosSucursal;

impl Resource for InventariosSucursal {
    type Entity = InventarioSucursal;
    type CreateDto = CreateInventarioSucursalDto;
    type UpdateDto = UpdateInventarioSucursalDto;
    type ListParams = InventarioSucursalFilters;

    const KEY: &'static str = "inventario-sucursal";
    const PATH: &'static str = "/inventario-sucursal";
    const POLICY: CachePolicy = CachePolicy::OPERATIONAL;
    const DEPENDENTS: &'static [&'static str] = &["reporte-inventario"];
    const ELEMENT_NAME: &'static str = "Registro de inventario";
    const LIST_NAME: &'static str = "Inventario de sucursal";

    fn id(entity: &InventarioSucursal) -> i64 {
        entity.id
    }

    fn label(entity: &InventarioSucursal) -> String {
        format!("Producto #{} ({} u.)", entity.producto_id, entity.stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortfall_never_negative() {
        let mut row = InventarioSucursal {
            id: 1,
            sucursal_id: 2,
            producto_id: 9,
            stock: 3,
            stock_minimo: 5,
            ubicacion: None,
        };
        assert!(row.bajo_minimo());
        assert_eq!(row.faltante(), 2);
        row.stock = 8;
        assert!(!row.bajo_minimo());
        assert_eq!(row.faltante(), 0);
    }

    #[test]
    fn filters_only_send_what_is_set() {
        let filters = InventarioSucursalFilters {
            sucursal_id: Some(4),
            producto_id: None,
        };
        assert_eq!(
            InventariosSucursal::list_path(&filters),
            "/inventario-sucursal?sucursalId=4"
        );
    }
}
