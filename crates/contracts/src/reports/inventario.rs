use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::a003_inventario_tela::InventarioTela;
use crate::domain::a009_producto::Producto;
use crate::domain::a011_sucursal::Sucursal;
use crate::domain::a012_inventario_tienda::InventarioTienda;
use crate::domain::a013_inventario_sucursal::InventarioSucursal;
use crate::domain::Existencia;
use crate::shared::form::round_to;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tipo", content = "id")]
pub enum Ubicacion {
    Tienda(i64),
    Sucursal(i64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertaStock {
    pub ubicacion: Ubicacion,
    pub ubicacion_nombre: String,
    pub producto_id: i64,
    pub producto_nombre: String,
    pub stock: i64,
    pub stock_minimo: i64,
    pub faltante: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTela {
    pub tipo_tela: String,
    pub rollos: i64,
    pub kilos: f64,
    pub valor: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteInventario {
    pub bajo_minimo: Vec<AlertaStock>,
    pub telas: Vec<StockTela>,
    pub valor_telas: f64,
    pub kilos_telas: f64,
    pub rollos: i64,
}

pub struct FuentesInventario<'a> {
    pub tienda: &'a [InventarioTienda],
    pub sucursal: &'a [InventarioSucursal],
    pub telas: &'a [InventarioTela],
    pub productos: &'a [Producto],
    pub sucursales: &'a [Sucursal],
}

fn alerta(
    fila: &impl Existencia,
    ubicacion: Ubicacion,
    ubicacion_nombre: String,
    productos: &HashMap<i64, &str>,
) -> AlertaStock {
    let producto_id = fila.producto_id();
    AlertaStock {
        ubicacion,
        ubicacion_nombre,
        producto_id,
        producto_nombre: productos
            .get(&producto_id)
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("Producto #{}", producto_id)),
        stock: fila.stock(),
        stock_minimo: fila.stock_minimo(),
        faltante: fila.faltante(),
    }
}

/// Productos por debajo de su mínimo en tienda y sucursales, y valor del
/// stock de tela.
pub fn reporte_inventario(fuentes: FuentesInventario<'_>) -> ReporteInventario {
    let productos: HashMap<i64, &str> = fuentes
        .productos
        .iter()
        .map(|p| (p.id, p.nombre.as_str()))
        .collect();
    let sucursales: HashMap<i64, &str> = fuentes
        .sucursales
        .iter()
        .map(|s| (s.id, s.nombre.as_str()))
        .collect();

    let mut bajo_minimo: Vec<AlertaStock> = fuentes
        .tienda
        .iter()
        .filter(|fila| fila.bajo_minimo())
        .map(|fila| {
            alerta(
                fila,
                Ubicacion::Tienda(fila.ubicacion_id()),
                "Almacén tienda".to_string(),
                &productos,
            )
        })
        .collect();
    bajo_minimo.extend(
        fuentes
            .sucursal
            .iter()
            .filter(|fila| fila.bajo_minimo())
            .map(|fila| {
                let id = fila.ubicacion_id();
                let nombre = sucursales
                    .get(&id)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| format!("Sucursal #{}", id));
                alerta(fila, Ubicacion::Sucursal(id), nombre, &productos)
            }),
    );
    // lo más urgente primero
    bajo_minimo.sort_by(|a, b| {
        b.faltante
            .cmp(&a.faltante)
            .then_with(|| a.producto_id.cmp(&b.producto_id))
    });

    let mut por_tipo: BTreeMap<String, (i64, f64, f64)> = BTreeMap::new();
    for lote in fuentes.telas {
        let fila = por_tipo.entry(lote.tipo_tela.trim().to_string()).or_default();
        fila.0 += lote.cantidad_rollos;
        fila.1 += lote.peso_grupo;
        fila.2 += lote.importe;
    }
    let telas: Vec<StockTela> = por_tipo
        .into_iter()
        .map(|(tipo_tela, (rollos, kilos, valor))| StockTela {
            tipo_tela,
            rollos,
            kilos: round_to(kilos, 2),
            valor: round_to(valor, 2),
        })
        .collect();

    ReporteInventario {
        bajo_minimo,
        valor_telas: round_to(telas.iter().map(|t| t.valor).sum(), 2),
        kilos_telas: round_to(telas.iter().map(|t| t.kilos).sum(), 2),
        rollos: telas.iter().map(|t| t.rollos).sum(),
        telas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_tienda(id: i64, producto_id: i64, stock: i64, minimo: i64) -> InventarioTienda {
        InventarioTienda {
            id,
            tienda_id: 1,
            producto_id,
            stock,
            stock_minimo: minimo,
            ubicacion: None,
        }
    }

    fn en_sucursal(id: i64, sucursal_id: i64, producto_id: i64, stock: i64, minimo: i64) -> InventarioSucursal {
        InventarioSucursal {
            id,
            sucursal_id,
            producto_id,
            stock,
            stock_minimo: minimo,
            ubicacion: None,
        }
    }

    fn lote(tipo: &str, rollos: i64, kilos: f64, importe: f64) -> InventarioTela {
        InventarioTela {
            id: 1,
            tela_id: 1,
            proveedor_id: 1,
            color: "Negro".into(),
            cantidad_rollos: rollos,
            presentacion: "ROLLO".into(),
            tipo_tela: tipo.into(),
            precio_kg: 0.0,
            peso_grupo: kilos,
            importe,
            fecha_compra: None,
            notas: None,
        }
    }

    #[test]
    fn only_rows_below_minimum_most_urgent_first() {
        let tienda = vec![en_tienda(1, 10, 5, 5), en_tienda(2, 11, 1, 4)];
        let sucursal = vec![en_sucursal(3, 7, 10, 0, 6)];
        let sucursales = vec![Sucursal {
            id: 7,
            nombre: "Gamarra".into(),
            direccion: "Jr. Gamarra 123".into(),
            telefono: None,
            tienda_id: 1,
            activo: true,
        }];
        let r = reporte_inventario(FuentesInventario {
            tienda: &tienda,
            sucursal: &sucursal,
            telas: &[],
            productos: &[],
            sucursales: &sucursales,
        });
        assert_eq!(r.bajo_minimo.len(), 2);
        assert_eq!(r.bajo_minimo[0].ubicacion, Ubicacion::Sucursal(7));
        assert_eq!(r.bajo_minimo[0].ubicacion_nombre, "Gamarra");
        assert_eq!(r.bajo_minimo[0].faltante, 6);
        assert_eq!(r.bajo_minimo[1].producto_nombre, "Producto #11");
    }

    #[test]
    fn fabric_value_is_sum_of_importe() {
        let telas = vec![
            lote("Jersey", 2, 40.0, 500.0),
            lote("Jersey ", 1, 20.5, 250.25),
            lote("Franela", 3, 60.0, 780.0),
        ];
        let r = reporte_inventario(FuentesInventario {
            tienda: &[],
            sucursal: &[],
            telas: &telas,
            productos: &[],
            sucursales: &[],
        });
        assert_eq!(r.valor_telas, 1530.25);
        assert_eq!(r.rollos, 6);
        assert_eq!(r.telas.len(), 2);
        assert_eq!(r.telas[1].tipo_tela, "Jersey");
        assert_eq!(r.telas[1].kilos, 60.5);
    }
}
