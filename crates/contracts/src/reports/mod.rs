//! Reportes calculados en el cliente a partir de los listados.
//!
//! Cada reporte se guarda en la caché bajo su propia raíz (`reporte-*`), que
//! las entidades de origen declaran como dependiente para invalidarla.

pub mod inventario;
pub mod produccion;
pub mod ventas;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const REPORTE_VENTAS: &str = "reporte-ventas";
pub const REPORTE_PRODUCCION: &str = "reporte-produccion";
pub const REPORTE_INVENTARIO: &str = "reporte-inventario";

/// Rango de fechas inclusivo; un extremo ausente no limita.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangoFechas {
    pub desde: Option<NaiveDate>,
    pub hasta: Option<NaiveDate>,
}

impl RangoFechas {
    pub fn new(desde: Option<NaiveDate>, hasta: Option<NaiveDate>) -> Self {
        Self { desde, hasta }
    }

    /// Primer y último día del mes.
    pub fn mes(year: i32, month: u32) -> Option<Self> {
        let desde = NaiveDate::from_ymd_opt(year, month, 1)?;
        let siguiente = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self::new(Some(desde), siguiente.pred_opt()))
    }

    /// Mes calendario que contiene `dia`.
    pub fn mes_de(dia: NaiveDate) -> Option<Self> {
        Self::mes(dia.year(), dia.month())
    }

    pub fn contiene(&self, fecha: NaiveDate) -> bool {
        self.desde.map_or(true, |d| fecha >= d) && self.hasta.map_or(true, |h| fecha <= h)
    }

    pub fn es_valido(&self) -> bool {
        match (self.desde, self.hasta) {
            (Some(d), Some(h)) => d <= h,
            _ => true,
        }
    }

    /// Nombre estable para la clave de caché.
    pub fn cache_name(&self) -> String {
        let fmt = |f: Option<NaiveDate>| f.map(|d| d.to_string()).unwrap_or_default();
        format!("{}..{}", fmt(self.desde), fmt(self.hasta))
    }
}

/// Fila de una serie agregada, con su ancho relativo para la barra CSS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barra {
    pub etiqueta: String,
    pub valor: f64,
    /// 0..=100, relativo al mayor valor de la serie
    pub porcentaje: f64,
}

pub fn barras(series: impl IntoIterator<Item = (String, f64)>) -> Vec<Barra> {
    let series: Vec<(String, f64)> = series.into_iter().collect();
    let max = series.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    series
        .into_iter()
        .map(|(etiqueta, valor)| Barra {
            porcentaje: if max > 0.0 { valor.max(0.0) * 100.0 / max } else { 0.0 },
            etiqueta,
            valor,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_range_handles_december_and_leap_years() {
        let feb = RangoFechas::mes(2024, 2).unwrap();
        assert_eq!(feb.hasta, Some(d(2024, 2, 29)));
        let dec = RangoFechas::mes(2023, 12).unwrap();
        assert_eq!(dec.desde, Some(d(2023, 12, 1)));
        assert_eq!(dec.hasta, Some(d(2023, 12, 31)));
        assert!(RangoFechas::mes(2024, 13).is_none());
    }

    #[test]
    fn open_ends_do_not_limit() {
        let rango = RangoFechas::new(Some(d(2024, 1, 10)), None);
        assert!(rango.contiene(d(2030, 1, 1)));
        assert!(!rango.contiene(d(2024, 1, 9)));
        assert!(RangoFechas::default().contiene(d(1990, 1, 1)));
        assert!(!RangoFechas::new(Some(d(2024, 2, 1)), Some(d(2024, 1, 1))).es_valido());
    }

    #[test]
    fn bars_are_relative_to_the_largest_value() {
        let out = barras(vec![("a".to_string(), 50.0), ("b".to_string(), 200.0)]);
        assert_eq!(out[0].porcentaje, 25.0);
        assert_eq!(out[1].porcentaje, 100.0);
        assert!(barras(vec![("z".to_string(), 0.0)])[0].porcentaje == 0.0);
    }

    #[test]
    fn every_report_input_invalidates_its_report() {
        use crate::domain::{
            a003_inventario_tela::InventarioTelas, a004_parametros_tela::ParametrosTelas,
            a005_costurero::Costureros, a006_trabajo::Trabajos,
            a007_trabajo_finalizado::TrabajosFinalizados, a009_producto::Productos,
            a011_sucursal::Sucursales, a012_inventario_tienda::InventariosTienda,
            a013_inventario_sucursal::InventariosSucursal, a014_venta::Ventas,
        };
        use crate::shared::resource::invalidation_roots;

        for roots in [invalidation_roots::<Ventas>(), invalidation_roots::<Productos>()] {
            assert!(roots.contains(&REPORTE_VENTAS), "{:?}", roots);
        }
        for roots in [
            invalidation_roots::<Trabajos>(),
            invalidation_roots::<TrabajosFinalizados>(),
            invalidation_roots::<Costureros>(),
            invalidation_roots::<ParametrosTelas>(),
        ] {
            assert!(roots.contains(&REPORTE_PRODUCCION), "{:?}", roots);
        }
        for roots in [
            invalidation_roots::<InventariosTienda>(),
            invalidation_roots::<InventariosSucursal>(),
            invalidation_roots::<InventarioTelas>(),
            invalidation_roots::<Productos>(),
            invalidation_roots::<Sucursales>(),
        ] {
            assert!(roots.contains(&REPORTE_INVENTARIO), "{:?}", roots);
        }
    }
}
