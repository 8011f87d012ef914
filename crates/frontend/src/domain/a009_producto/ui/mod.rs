mod categoria_editor;
mod imagenes_editor;

use contracts::domain::a008_categoria::{Categorias, Subcategorias};
use contracts::domain::a009_producto::aggregate::{Producto, Productos};
use contracts::shared::form::FieldSpec;
use contracts::shared::resource::Resource;
use leptos::prelude::*;

use crate::shared::form::FormCtx;
use crate::shared::list::{crud_list_page, CellValue, Column, EntityUi, Tone};

use categoria_editor::CategoriaEditor;
use imagenes_editor::ImagenesEditor;

impl EntityUi for Productos {
    const PAGE_ID: &'static str = "a009_producto--list";

    fn columns() -> Vec<Column<Producto>> {
        vec![
            Column::new("codigo", "Código", |p, _| p.codigo.clone().into()),
            Column::new("nombre", "Nombre", |p, _| p.nombre.as_str().into()),
            Column::new("categoria", "Categoría", |p, l| {
                l.opt_label(Categorias::KEY, p.categoria_id).into()
            }),
            Column::new("subcategoria", "Subcategoría", |p, l| {
                l.opt_label(Subcategorias::KEY, p.subcategoria_id).into()
            }),
            Column::new("precio", "Precio", |p, _| CellValue::Money(p.precio)),
            Column::new("precioVigente", "Precio vigente", |p, _| {
                CellValue::Money(p.precio_vigente())
            }),
            Column::new("stock", "Stock", |p, _| {
                if p.stock == 0 {
                    CellValue::Badge("Agotado".to_string(), Tone::Danger)
                } else {
                    CellValue::Int(p.stock)
                }
            }),
            Column::new("imagenes", "Imágenes", |p, _| CellValue::Int(p.imagenes.len() as i64)),
            Column::new("destacado", "Destacado", |p, _| CellValue::Bool(p.destacado)),
            Column::new("activo", "Activo", |p, _| CellValue::Bool(p.activo)),
        ]
    }

    fn field_editor(field: &FieldSpec, form: FormCtx) -> Option<AnyView> {
        match field.name {
            "categoriaId" => Some(view! { <CategoriaEditor form=form /> }.into_any()),
            // rendered by the category editor
            "subcategoriaId" => Some(().into_any()),
            _ => None,
        }
    }

    fn extra_editor(form: FormCtx) -> Option<AnyView> {
        Some(view! { <ImagenesEditor form=form /> }.into_any())
    }
}

#[component]
pub fn ProductoList() -> impl IntoView {
    crud_list_page::<Productos>()
}
