use serde::{Deserialize, Serialize};

use crate::domain::default_true;
use crate::shared::form::{EntityForm, FieldErrors, FieldSpec, FormReader, FormValues};
use crate::shared::resource::{CachePolicy, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategoria {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub categoria_id: i64,
    #[serde(default = "default_true")]
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubcategoriaDto {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub categoria_id: i64,
    pub activo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubcategoriaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl From<CreateSubcategoriaDto> for UpdateSubcategoriaDto {
    fn from(dto: CreateSubcategoriaDto) -> Self {
        Self {
            nombre: Some(dto.nombre),
            descripcion: Some(dto.descripcion),
            categoria_id: Some(dto.categoria_id),
            activo: Some(dto.activo),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoriaFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<i64>,
}

pub struct Subcategorias;

impl Resource for Subcategorias {
    type Entity = Subcategoria;
    type CreateDto = CreateSubcategoriaDto;
    type UpdateDto = UpdateSubcategoriaDto;
    type ListParams = SubcategoriaFilters;

    const KEY: &'static str = "subcategorias";
    const PATH: &'static str = "/subcategorias";
    const POLICY: CachePolicy = CachePolicy::CATALOG;
    // Las categorías traen sus subcategorías embebidas.
    const DEPENDENTS: &'static [&'static str] = &["categorias", "productos"];
    const ELEMENT_NAME: &'static str = "Subcategoría";
    const LIST_NAME: &'static str = "Subcategorías";

    fn id(entity: &Subcategoria) -> i64 {
        entity.id
    }

    fn label(entity: &Subcategoria) -> String {
        entity.nombre.clone()
    }
}

impl EntityForm for Subcategorias {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("nombre", "Nombre").required(),
            FieldSpec::textarea("descripcion", "Descripción"),
            FieldSpec::reference("categoriaId", "Categoría", "categorias").required(),
            FieldSpec::boolean("activo", "Activa").default_value("true"),
        ]
    }

    fn from_entity(s: &Subcategoria) -> FormValues {
        FormValues::new()
            .with("nombre", &s.nombre)
            .with_opt("descripcion", s.descripcion.as_ref())
            .with("categoriaId", s.categoria_id)
            .with("activo", s.activo)
    }

    fn to_create(values: &FormValues) -> Result<CreateSubcategoriaDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);
        let dto = CreateSubcategoriaDto {
            nombre: r.text("nombre"),
            descripcion: r.opt_text("descripcion"),
            categoria_id: r.int("categoriaId"),
            activo: r.boolean("activo"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateSubcategoriaDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}
