use contracts::domain::a009_producto::aggregate::Productos;
use contracts::domain::a010_tienda::aggregate::Tiendas;
use contracts::domain::a012_inventario_tienda::aggregate::{InventarioTienda, InventariosTienda};
use contracts::domain::Existencia;
use contracts::shared::resource::Resource;
use leptos::prelude::*;

use crate::shared::list::{crud_list_page, CellValue, Column, EntityUi, Tone};

/// Stock cell, flagged when it is under the minimum.
pub fn stock_cell(row: &impl Existencia) -> CellValue {
    if row.bajo_minimo() {
        CellValue::Badge(
            format!("{} (faltan {})", row.stock(), row.faltante()),
            Tone::Danger,
        )
    } else {
        CellValue::Int(row.stock())
    }
}

impl EntityUi for InventariosTienda {
    const PAGE_ID: &'static str = "a012_inventario_tienda--list";

    fn columns() -> Vec<Column<InventarioTienda>> {
        vec![
            Column::new("producto", "Producto", |i, l| {
                l.label(Productos::KEY, i.producto_id).into()
            }),
            Column::new("tienda", "Tienda", |i, l| l.label(Tiendas::KEY, i.tienda_id).into()),
            Column::new("stock", "Stock", |i, _| stock_cell(i)),
            Column::new("stockMinimo", "Mínimo", |i, _| CellValue::Int(i.stock_minimo)),
            Column::new("ubicacion", "Ubicación", |i, _| i.ubicacion.clone().into()),
        ]
    }
}

#[component]
pub fn InventarioTiendaList() -> impl IntoView {
    crud_list_page::<InventariosTienda>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fila(stock: i64, stock_minimo: i64) -> InventarioTienda {
        InventarioTienda {
            id: 1,
            tienda_id: 1,
            producto_id: 3,
            stock,
            stock_minimo,
            ubicacion: None,
        }
    }

    #[test]
    fn low_stock_is_flagged_with_the_shortfall() {
        assert_eq!(
            stock_cell(&fila(2, 5)),
            CellValue::Badge("2 (faltan 3)".to_string(), Tone::Danger)
        );
        assert_eq!(stock_cell(&fila(5, 5)), CellValue::Int(5));
    }
}
