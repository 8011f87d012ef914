use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a009_producto::Producto;
use crate::domain::a014_venta::{MetodoPago, Venta};
use crate::shared::form::{round_to, FormEnum};

use super::RangoFechas;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VentasPorDia {
    pub fecha: NaiveDate,
    pub ventas: usize,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VentasPorMetodo {
    pub metodo: MetodoPago,
    pub ventas: usize,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoVendido {
    pub producto_id: i64,
    pub nombre: String,
    pub unidades: i64,
    pub importe: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteVentas {
    pub rango: RangoFechas,
    pub cantidad_ventas: usize,
    pub anuladas: usize,
    pub total: f64,
    pub ticket_promedio: f64,
    pub unidades: i64,
    pub por_dia: Vec<VentasPorDia>,
    pub por_metodo: Vec<VentasPorMetodo>,
    pub top_productos: Vec<ProductoVendido>,
}

/// Agrega las ventas completadas dentro de `rango`. Las anuladas solo se
/// cuentan aparte.
pub fn reporte_ventas(
    ventas: &[Venta],
    productos: &[Producto],
    rango: RangoFechas,
    top: usize,
) -> ReporteVentas {
    let en_rango: Vec<&Venta> = ventas.iter().filter(|v| rango.contiene(v.fecha)).collect();
    let anuladas = en_rango.iter().filter(|v| !v.es_valida()).count();
    let validas: Vec<&Venta> = en_rango.into_iter().filter(|v| v.es_valida()).collect();

    let mut por_dia: BTreeMap<NaiveDate, (usize, f64)> = BTreeMap::new();
    let mut por_metodo: HashMap<MetodoPago, (usize, f64)> = HashMap::new();
    let mut por_producto: HashMap<i64, (i64, f64)> = HashMap::new();

    for venta in &validas {
        let dia = por_dia.entry(venta.fecha).or_default();
        dia.0 += 1;
        dia.1 += venta.total;

        let metodo = por_metodo.entry(venta.metodo_pago).or_default();
        metodo.0 += 1;
        metodo.1 += venta.total;

        for item in &venta.items {
            let p = por_producto.entry(item.producto_id).or_default();
            p.0 += item.cantidad;
            p.1 += item.importe();
        }
    }

    let total = round_to(validas.iter().map(|v| v.total).sum(), 2);
    let cantidad_ventas = validas.len();
    let nombres: HashMap<i64, &str> = productos
        .iter()
        .map(|p| (p.id, p.nombre.as_str()))
        .collect();

    let mut top_productos: Vec<ProductoVendido> = por_producto
        .into_iter()
        .map(|(producto_id, (unidades, importe))| ProductoVendido {
            producto_id,
            nombre: nombres
                .get(&producto_id)
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("Producto #{}", producto_id)),
            unidades,
            importe: round_to(importe, 2),
        })
        .collect();
    top_productos.sort_by(|a, b| {
        b.unidades
            .cmp(&a.unidades)
            .then_with(|| b.importe.total_cmp(&a.importe))
            .then_with(|| a.producto_id.cmp(&b.producto_id))
    });
    let unidades = top_productos.iter().map(|p| p.unidades).sum();
    top_productos.truncate(top);

    // orden fijo de métodos, omitiendo los que no tienen ventas
    let por_metodo = MetodoPago::ALL
        .iter()
        .filter_map(|metodo| {
            por_metodo.get(metodo).map(|(ventas, total)| VentasPorMetodo {
                metodo: *metodo,
                ventas: *ventas,
                total: round_to(*total, 2),
            })
        })
        .collect();

    ReporteVentas {
        rango,
        cantidad_ventas,
        anuladas,
        total,
        ticket_promedio: if cantidad_ventas == 0 {
            0.0
        } else {
            round_to(total / cantidad_ventas as f64, 2)
        },
        unidades,
        por_dia: por_dia
            .into_iter()
            .map(|(fecha, (ventas, total))| VentasPorDia {
                fecha,
                ventas,
                total: round_to(total, 2),
            })
            .collect(),
        por_metodo,
        top_productos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a014_venta::{EstadoVenta, VentaItem};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn venta(id: i64, day: u32, metodo: MetodoPago, estado: EstadoVenta, items: Vec<VentaItem>) -> Venta {
        Venta {
            id,
            fecha: d(day),
            tienda_id: 1,
            sucursal_id: None,
            usuario_id: None,
            cliente: None,
            metodo_pago: metodo,
            estado,
            total: crate::domain::a014_venta::total_items(&items),
            items,
        }
    }

    fn producto(id: i64, nombre: &str) -> Producto {
        Producto {
            id,
            codigo: None,
            nombre: nombre.into(),
            descripcion: None,
            precio: 10.0,
            precio_oferta: None,
            stock: 0,
            categoria_id: None,
            subcategoria_id: None,
            tienda_id: 1,
            imagenes: vec![],
            activo: true,
            destacado: false,
        }
    }

    fn sample() -> Vec<Venta> {
        use EstadoVenta::*;
        use MetodoPago::*;
        vec![
            venta(1, 1, Efectivo, Completada, vec![VentaItem::new(1, 2, 30.0)]),
            venta(2, 1, YapePlin, Completada, vec![VentaItem::new(2, 1, 15.0)]),
            venta(3, 2, Efectivo, Anulada, vec![VentaItem::new(2, 10, 15.0)]),
            venta(4, 5, Tarjeta, Completada, vec![
                VentaItem::new(2, 3, 15.0),
                VentaItem::new(1, 1, 30.0),
            ]),
            venta(5, 20, Efectivo, Completada, vec![VentaItem::new(1, 1, 30.0)]),
        ]
    }

    #[test]
    fn annulled_sales_are_excluded_from_totals() {
        let rango = RangoFechas::new(Some(d(1)), Some(d(10)));
        let r = reporte_ventas(&sample(), &[], rango, 5);
        assert_eq!(r.cantidad_ventas, 3);
        assert_eq!(r.anuladas, 1);
        assert_eq!(r.total, 150.0);
        assert_eq!(r.ticket_promedio, 50.0);
        assert_eq!(r.unidades, 7);
    }

    #[test]
    fn grouped_by_day_and_method() {
        let r = reporte_ventas(&sample(), &[], RangoFechas::default(), 5);
        let dias: Vec<(NaiveDate, usize)> = r.por_dia.iter().map(|x| (x.fecha, x.ventas)).collect();
        assert_eq!(dias, vec![(d(1), 2), (d(5), 1), (d(20), 1)]);

        let metodos: Vec<MetodoPago> = r.por_metodo.iter().map(|m| m.metodo).collect();
        assert_eq!(
            metodos,
            vec![MetodoPago::Efectivo, MetodoPago::Tarjeta, MetodoPago::YapePlin]
        );
        assert_eq!(r.por_metodo[0].total, 90.0);
    }

    #[test]
    fn top_products_by_quantity_with_names() {
        let productos = vec![producto(1, "Polo"), producto(2, "Short")];
        let r = reporte_ventas(&sample(), &productos, RangoFechas::default(), 1);
        assert_eq!(r.top_productos.len(), 1);
        assert_eq!(r.top_productos[0].nombre, "Polo");
        assert_eq!(r.top_productos[0].unidades, 4);

        let r = reporte_ventas(&sample(), &[], RangoFechas::default(), 5);
        assert_eq!(r.top_productos[1].nombre, "Producto #2");
    }
}
