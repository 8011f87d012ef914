use contracts::domain::a009_producto::aggregate::Productos;
use contracts::domain::a011_sucursal::aggregate::Sucursales;
use contracts::domain::a013_inventario_sucursal::aggregate::{
    InventarioSucursal, InventariosSucursal,
};
use contracts::shared::resource::Resource;
use leptos::prelude::*;

use crate::domain::a012_inventario_tienda::ui::stock_cell;
use crate::shared::list::{crud_list_page, CellValue, Column, EntityUi};

impl EntityUi for InventariosSucursal {
    const PAGE_ID: &'static str = "a013_inventario_sucursal--list";

    fn columns() -> Vec<Column<InventarioSucursal>> {
        vec![
            Column::new("producto", "Producto", |i, l| {
                l.label(Productos::KEY, i.producto_id).into()
            }),
            Column::new("sucursal", "Sucursal", |i, l| {
                l.label(Sucursales::KEY, i.sucursal_id).into()
            }),
            Column::new("stock", "Stock", |i, _| stock_cell(i)),
            Column::new("stockMinimo", "Mínimo", |i, _| CellValue::Int(i.stock_minimo)),
            Column::new("ubicacion", "Ubicación", |i, _| i.ubicacion.clone().into()),
        ]
    }
}

#[component]
pub fn InventarioSucursalList() -> impl IntoView {
    crud_list_page::<InventariosSucursal>()
}
