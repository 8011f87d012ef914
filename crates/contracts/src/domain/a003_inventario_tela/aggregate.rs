use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::fecha;
use crate::shared::resource::{CachePolicy, Resource};

/// Lote de tela comprado (stock de tela en kilos y rollos)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventarioTela {
    pub id: i64,
    pub tela_id: i64,
    pub proveedor_id: i64,
    pub color: String,
    pub cantidad_rollos: i64,
    /// "ROLLO", "TUBULAR", "ABIERTO"...
    pub presentacion: String,
    pub tipo_tela: String,
    #[serde(rename = "precioKG")]
    pub precio_kg: f64,
    pub peso_grupo: f64,
    pub importe: f64,
    #[serde(default, deserialize_with = "fecha::opt_date")]
    pub fecha_compra: Option<NaiveDate>,
    #[serde(default)]
    pub notas: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventarioTelaDto {
    pub tela_id: i64,
    pub proveedor_id: i64,
    pub color: String,
    pub cantidad_rollos: i64,
    pub presentacion: String,
    pub tipo_tela: String,
    #[serde(rename = "precioKG")]
    pub precio_kg: f64,
    pub peso_grupo: f64,
    pub importe: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_compra: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventarioTelaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tela_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proveedor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cantidad_rollos: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentacion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_tela: Option<String>,
    #[serde(rename = "precioKG", skip_serializing_if = "Option::is_none")]
    pub precio_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peso_grupo: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_compra: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notas: Option<Option<String>>,
}

impl From<CreateInventarioTelaDto> for UpdateInventarioTelaDto {
    fn from(dto: CreateInventarioTelaDto) -> Self {
        Self {
            tela_id: Some(dto.tela_id),
            proveedor_id: Some(dto.proveedor_id),
            color: Some(dto.color),
            cantidad_rollos: Some(dto.cantidad_rollos),
            presentacion: Some(dto.presentacion),
            tipo_tela: Some(dto.tipo_tela),
            precio_kg: Some(dto.precio_kg),
            peso_grupo: Some(dto.peso_grupo),
            importe: Some(dto.importe),
            fecha_compra: Some(dto.fecha_compra),
            notas: Some(dto.notas),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventarioTelaFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proveedor_id: Option<i64>,
}

pub struct InventarioTelas;

impl Resource for InventarioTelas {
    type Entity = InventarioTela;
    type CreateDto = CreateInventarioTelaDto;
    type UpdateDto = UpdateInventarioTelaDto;
    type ListParams = InventarioTelaFilters;

    const KEY: &'static str = "inventario-telas";
    const PATH: &'static str = "/inventario-telas";
    const POLICY: CachePolicy = CachePolicy::OPERATIONAL;
    const DEPENDENTS: &'static [&'static str] = &["reporte-inventario"];
    const ELEMENT_NAME: &'static str = "Lote de tela";
    const LIST_NAME: &'static str = "Inventario de telas";

    fn id(entity: &InventarioTela) -> i64 {
        entity.id
    }

    fn label(entity: &InventarioTela) -> String {
        format!(
            "{} {} · {} kg",
            entity.tipo_tela, entity.color, entity.peso_grupo
        )
    }
}
