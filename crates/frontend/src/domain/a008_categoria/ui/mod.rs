use contracts::domain::a008_categoria::{Categoria, Categorias, Subcategoria, Subcategorias};
use contracts::shared::resource::Resource;
use leptos::prelude::*;

use crate::shared::list::{crud_list_page, CellValue, Column, EntityUi};

impl EntityUi for Categorias {
    const PAGE_ID: &'static str = "a008_categoria--list";

    fn columns() -> Vec<Column<Categoria>> {
        vec![
            Column::new("nombre", "Nombre", |c, _| c.nombre.as_str().into()),
            Column::new("descripcion", "Descripción", |c, _| c.descripcion.clone().into()),
            Column::new("subcategorias", "Subcategorías", |c, _| {
                CellValue::Int(c.subcategorias.len() as i64)
            }),
            Column::new("activo", "Activa", |c, _| CellValue::Bool(c.activo)),
        ]
    }
}

impl EntityUi for Subcategorias {
    const PAGE_ID: &'static str = "a008_subcategoria--list";

    fn columns() -> Vec<Column<Subcategoria>> {
        vec![
            Column::new("nombre", "Nombre", |s, _| s.nombre.as_str().into()),
            Column::new("categoria", "Categoría", |s, l| {
                l.label(Categorias::KEY, s.categoria_id).into()
            }),
            Column::new("descripcion", "Descripción", |s, _| s.descripcion.clone().into()),
            Column::new("activo", "Activa", |s, _| CellValue::Bool(s.activo)),
        ]
    }
}

#[component]
pub fn CategoriaList() -> impl IntoView {
    crud_list_page::<Categorias>()
}

#[component]
pub fn SubcategoriaList() -> impl IntoView {
    crud_list_page::<Subcategorias>()
}
