use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::fecha;
use crate::form_enum;
use crate::shared::resource::{CachePolicy, Resource};

form_enum! {
    pub enum EstadoCosturero {
        Activo => ("ACTIVO", "Activo"),
        Inactivo => ("INACTIVO", "Inactivo"),
    }
}

/// Costurero (operario del taller)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Costurero {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub dni: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(deserialize_with = "fecha::date")]
    pub fecha_ingreso: NaiveDate,
    pub estado: EstadoCosturero,
    pub tienda_id: i64,
}

impl Costurero {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCostureroDto {
    pub nombre: String,
    pub apellido: String,
    pub dni: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    pub fecha_ingreso: NaiveDate,
    pub estado: EstadoCosturero,
    pub tienda_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCostureroDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_ingreso: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoCosturero>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tienda_id: Option<i64>,
}

impl From<CreateCostureroDto> for UpdateCostureroDto {
    fn from(dto: CreateCostureroDto) -> Self {
        Self {
            nombre: Some(dto.nombre),
            apellido: Some(dto.apellido),
            dni: Some(dto.dni),
            telefono: Some(dto.telefono),
            email: Some(dto.email),
            direccion: Some(dto.direccion),
            fecha_ingreso: Some(dto.fecha_ingreso),
            estado: Some(dto.estado),
            tienda_id: Some(dto.tienda_id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostureroFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoCosturero>,
}

pub struct Costureros;

impl Resource for Costureros {
    type Entity = Costurero;
    type CreateDto = CreateCostureroDto;
    type UpdateDto = UpdateCostureroDto;
    type ListParams = CostureroFilters;

    const KEY: &'static str = "costureros";
    const PATH: &'static str = "/costureros";
    const POLICY: CachePolicy = CachePolicy::CATALOG;
    const DEPENDENTS: &'static [&'static str] = &["reporte-produccion"];
    const ELEMENT_NAME: &'static str = "Costurero";
    const LIST_NAME: &'static str = "Costureros";

    fn id(entity: &Costurero) -> i64 {
        entity.id
    }

    fn label(entity: &Costurero) -> String {
        entity.nombre_completo()
    }
}
