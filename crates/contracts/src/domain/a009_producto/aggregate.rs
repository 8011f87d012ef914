use serde::{Deserialize, Serialize};

use crate::domain::default_true;
use crate::shared::resource::{CachePolicy, Resource};

/// Producto terminado a la venta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    pub id: i64,
    #[serde(default)]
    pub codigo: Option<String>,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio: f64,
    #[serde(default)]
    pub precio_oferta: Option<f64>,
    pub stock: i64,
    #[serde(default)]
    pub categoria_id: Option<i64>,
    #[serde(default)]
    pub subcategoria_id: Option<i64>,
    pub tienda_id: i64,
    /// data URIs (`data:image/png;base64,...`) o URLs
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
    #[serde(default)]
    pub destacado: bool,
}

impl Producto {
    /// Precio que paga el cliente.
    pub fn precio_vigente(&self) -> f64 {
        self.precio_oferta
            .filter(|oferta| *oferta > 0.0 && *oferta < self.precio)
            .unwrap_or(self.precio)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductoDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub precio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio_oferta: Option<f64>,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategoria_id: Option<i64>,
    pub tienda_id: i64,
    pub imagenes: Vec<String>,
    pub activo: bool,
    pub destacado: bool,
}

/// PATCH parcial. En los campos anulables `Some(None)` viaja como `null`
/// para que el servidor borre el valor guardado.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductoDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio_oferta: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategoria_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagenes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destacado: Option<bool>,
}

impl From<CreateProductoDto> for UpdateProductoDto {
    fn from(dto: CreateProductoDto) -> Self {
        Self {
            codigo: Some(dto.codigo),
            nombre: Some(dto.nombre),
            descripcion: Some(dto.descripcion),
            precio: Some(dto.precio),
            precio_oferta: Some(dto.precio_oferta),
            stock: Some(dto.stock),
            categoria_id: Some(dto.categoria_id),
            subcategoria_id: Some(dto.subcategoria_id),
            imagenes: Some(dto.imagenes),
            activo: Some(dto.activo),
            destacado: Some(dto.destacado),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategoria_id: Option<i64>,
}

pub struct Productos;

impl Resource for Productos {
    type Entity = Producto;
    type CreateDto = CreateProductoDto;
    type UpdateDto = UpdateProductoDto;
    type ListParams = ProductoFilters;

    const KEY: &'static str = "productos";
    const PATH: &'static str = "/productos";
    const POLICY: CachePolicy = CachePolicy::CATALOG;
    const DEPENDENTS: &'static [&'static str] = &["reporte-inventario", "reporte-ventas"];
    const ELEMENT_NAME: &'static str = "Producto";
    const LIST_NAME: &'static str = "Productos";

    fn id(entity: &Producto) -> i64 {
        entity.id
    }

    fn label(entity: &Producto) -> String {
        match &entity.codigo {
            Some(codigo) => format!("{} · {}", codigo, entity.nombre),
            None => entity.nombre.clone(),
        }
    }
}
