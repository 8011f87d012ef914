use serde::{Deserialize, Serialize};

use crate::domain::default_true;
use crate::shared::config::DEFAULT_TIENDA_ID;
use crate::shared::resource::{CachePolicy, Resource};

use super::subcategoria::Subcategoria;

/// Categoría del catálogo de la tienda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categoria {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub tienda_id: i64,
    #[serde(default = "default_true")]
    pub activo: bool,
    #[serde(default)]
    pub subcategorias: Vec<Subcategoria>,
}

impl Categoria {
    pub fn contiene_subcategoria(&self, subcategoria_id: i64) -> bool {
        self.subcategorias.iter().any(|s| s.id == subcategoria_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoriaDto {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub tienda_id: i64,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoriaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl From<CreateCategoriaDto> for UpdateCategoriaDto {
    fn from(dto: CreateCategoriaDto) -> Self {
        Self {
            nombre: Some(dto.nombre),
            descripcion: Some(dto.descripcion),
            activo: Some(dto.activo),
        }
    }
}

/// Las categorías se listan por tienda: `/categorias/tienda/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaParams {
    pub tienda_id: i64,
}

impl Default for CategoriaParams {
    fn default() -> Self {
        Self {
            tienda_id: DEFAULT_TIENDA_ID,
        }
    }
}

pub struct Categorias;

impl Resource for Categorias {
    type Entity = Categoria;
    type CreateDto = CreateCategoriaDto;
    type UpdateDto = UpdateCategoriaDto;
    type ListParams = CategoriaParams;

    const KEY: &'static str = "categorias";
    const PATH: &'static str = "/categorias";
    const POLICY: CachePolicy = CachePolicy::CATALOG;
    const DEPENDENTS: &'static [&'static str] = &["productos"];
    const ELEMENT_NAME: &'static str = "Categoría";
    const LIST_NAME: &'static str = "Categorías";

    fn id(entity: &Categoria) -> i64 {
        entity.id
    }

    fn label(entity: &Categoria) -> String {
        entity.nombre.clone()
    }

    fn list_path(params: &CategoriaParams) -> String {
        format!("{}/tienda/{}", Self::PATH, params.tienda_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::QueryKey;

    #[test]
    fn lists_by_store() {
        assert_eq!(
            Categorias::list_path(&CategoriaParams::default()),
            "/categorias/tienda/1"
        );
        assert_eq!(
            QueryKey::for_list::<Categorias>(&CategoriaParams { tienda_id: 2 }).segments(),
            vec!["categorias", "tiendaId=2"]
        );
    }
}
