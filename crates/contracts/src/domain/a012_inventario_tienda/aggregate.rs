use serde::{Deserialize, Serialize};

use crate::domain::Existencia;
use crate::shared::config::DEFAULT_TIENDA_ID;
use crate::shared::resource::{CachePolicy, Resource};

/// Stock de un producto en el almacén de la tienda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventarioTienda {
    pub id: i64,
    pub tienda_id: i64,
    pub producto_id: i64,
    pub stock: i64,
    #[serde(default)]
    pub stock_minimo: i64,
    #[serde(default)]
    pub ubicacion: Option<String>,
}

impl Existencia for InventarioTienda {
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
        self.tienda_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventarioTiendaDto {
    pub tienda_id: i64,
    pub producto_id: i64,
    pub stock: i64,
    pub stock_minimo: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventarioTiendaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producto_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_minimo: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<Option<String>>,
}

impl From<CreateInventarioTiendaDto> for UpdateInventarioTiendaDto {
    fn from(dto: CreateInventarioTiendaDto) -> Self {
        Self {
            producto_id: Some(dto.producto_id),
            stock: Some(dto.stock),
            stock_minimo: Some(dto.stock_minimo),
            ubicacion: Some(dto.ubicacion),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventarioTiendaFilters {
    pub tienda_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producto_id: Option<i64>,
}

impl Default for InventarioTiendaFilters {
    fn default() -> Self {
        Self {
            tienda_id: DEFAULT_TIENDA_ID,
            producto_id: None,
        }
    }
}

pub struct InventariosTienda;

impl Resource for InventariosTienda {
    type Entity = InventarioTienda;
    type CreateDto = CreateInventarioTiendaDto;
    type UpdateDto = UpdateInventarioTiendaDto;
    type ListParams = InventarioTiendaFilters;

    const KEY: &'static str = "inventario-tienda";
    const PATH: &'static str = "/inventario-tienda";
    const POLICY: CachePolicy = CachePolicy::OPERATIONAL;
    const DEPENDENTS: &'static [&'static str] = &["reporte-inventario"];
    const ELEMENT_NAME: &'static str = "Registro de inventario";
    const LIST_NAME: &'static str = "Inventario de tienda";

    fn id(entity: &InventarioTienda) -> i64 {
        entity.id
    }

    fn label(entity: &InventarioTienda) -> String {
        format!("Producto #{} ({} u.)", entity.producto_id, entity.stock)
    }
}
