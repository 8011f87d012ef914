use serde::{Deserialize, Serialize};

use crate::shared::resource::{CachePolicy, Resource};

/// Tipo de tela del catálogo (no es stock: el stock vive en inventario de telas)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tela {
    pub id: i64,
    pub nombre_comercial: String,
    pub tipo_tela: String,
    #[serde(default)]
    pub composicion: Option<String>,
    /// g/m²
    #[serde(default)]
    pub gramaje: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    pub proveedor_id: i64,
    #[serde(default)]
    pub notas: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTelaDto {
    pub nombre_comercial: String,
    pub tipo_tela: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composicion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gramaje: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub proveedor_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTelaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_comercial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_tela: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composicion: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gramaje: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proveedor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notas: Option<Option<String>>,
}

impl From<CreateTelaDto> for UpdateTelaDto {
    fn from(dto: CreateTelaDto) -> Self {
        Self {
            nombre_comercial: Some(dto.nombre_comercial),
            tipo_tela: Some(dto.tipo_tela),
            composicion: Some(dto.composicion),
            gramaje: Some(dto.gramaje),
            color: Some(dto.color),
            proveedor_id: Some(dto.proveedor_id),
            notas: Some(dto.notas),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelaFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proveedor_id: Option<i64>,
}

pub struct Telas;

impl Resource for Telas {
    type Entity = Tela;
    type CreateDto = CreateTelaDto;
    type UpdateDto = UpdateTelaDto;
    type ListParams = TelaFilters;

    const KEY: &'static str = "telas";
    const PATH: &'static str = "/telas";
    const POLICY: CachePolicy = CachePolicy::CATALOG;
    const DEPENDENTS: &'static [&'static str] = &["inventario-telas"];
    const ELEMENT_NAME: &'static str = "Tela";
    const LIST_NAME: &'static str = "Telas";

    fn id(entity: &Tela) -> i64 {
        entity.id
    }

    fn label(entity: &Tela) -> String {
        match &entity.color {
            Some(color) => format!("{} ({})", entity.nombre_comercial, color),
            None => entity.nombre_comercial.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_path_carries_filters() {
        let params = TelaFilters {
            search: Some("jersey".into()),
            proveedor_id: Some(2),
        };
        assert_eq!(Telas::list_path(&params), "/telas?search=jersey&proveedorId=2");
        assert_eq!(Telas::list_path(&TelaFilters::default()), "/telas");
    }
}
