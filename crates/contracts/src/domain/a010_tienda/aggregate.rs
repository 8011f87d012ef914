use serde::{Deserialize, Serialize};

use crate::domain::default_true;
use crate::shared::resource::{CachePolicy, NoParams, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tienda {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub ruc: Option<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTiendaDto {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTiendaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl From<CreateTiendaDto> for UpdateTiendaDto {
    fn from(dto: CreateTiendaDto) -> Self {
        Self {
            nombre: Some(dto.nombre),
            direccion: Some(dto.direccion),
            telefono: Some(dto.telefono),
            email: Some(dto.email),
            ruc: Some(dto.ruc),
            activo: Some(dto.activo),
        }
    }
}

pub struct Tiendas;

impl Resource for Tiendas {
    type Entity = Tienda;
    type CreateDto = CreateTiendaDto;
    type UpdateDto = UpdateTiendaDto;
    type ListParams = NoParams;

    const KEY: &'static str = "tiendas";
    const PATH: &'static str = "/tiendas";
    const POLICY: CachePolicy = CachePolicy::CATALOG;
    const DEPENDENTS: &'static [&'static str] = &["sucursales"];
    const ELEMENT_NAME: &'static str = "Tienda";
    const LIST_NAME: &'static str = "Tiendas";

    fn id(entity: &Tienda) -> i64 {
        entity.id
    }

    fn label(entity: &Tienda) -> String {
        entity.nombre.clone()
    }
}
