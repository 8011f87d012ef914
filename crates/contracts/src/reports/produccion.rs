use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::a004_parametros_tela::ParametrosTela;
use crate::domain::a005_costurero::Costurero;
use crate::domain::a006_trabajo::{EstadoTrabajo, Trabajo};
use crate::domain::a007_trabajo_finalizado::TrabajoFinalizado;
use crate::shared::form::{round_to, FormEnum};

use super::RangoFechas;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrabajosPorEstado {
    pub estado: EstadoTrabajo,
    pub trabajos: usize,
    pub unidades: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProduccionCosturero {
    pub costurero_id: i64,
    pub nombre: String,
    pub trabajos_finalizados: usize,
    pub producidas: i64,
    pub fallas: i64,
    /// porcentaje
    pub tasa_fallas: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporteProduccion {
    pub rango: RangoFechas,
    pub por_estado: Vec<TrabajosPorEstado>,
    pub por_costurero: Vec<ProduccionCosturero>,
    pub total_producidas: i64,
    pub total_fallas: i64,
    pub tasa_fallas: f64,
    /// kg de tela que requieren los trabajos pendientes y en proceso
    pub tela_comprometida_kg: f64,
}

fn tasa(fallas: i64, producidas: i64) -> f64 {
    let total = producidas + fallas;
    if total == 0 {
        0.0
    } else {
        round_to(fallas as f64 * 100.0 / total as f64, 2)
    }
}

/// Estado de los trabajos y rendimiento por costurero. El rango filtra los
/// cierres por `fechaFinalizacion`; el conteo por estado usa todos los trabajos.
pub fn reporte_produccion(
    trabajos: &[Trabajo],
    finalizados: &[TrabajoFinalizado],
    costureros: &[Costurero],
    parametros: &[ParametrosTela],
    rango: RangoFechas,
) -> ReporteProduccion {
    let por_estado = EstadoTrabajo::ALL
        .iter()
        .map(|estado| {
            let del_estado = trabajos.iter().filter(|t| t.estado == *estado);
            TrabajosPorEstado {
                estado: *estado,
                trabajos: del_estado.clone().count(),
                unidades: del_estado.map(|t| t.cantidad).sum(),
            }
        })
        .collect();

    let trabajo_costurero: HashMap<i64, i64> =
        trabajos.iter().map(|t| (t.id, t.costurero_id)).collect();

    let mut acumulado: HashMap<i64, (usize, i64, i64)> = HashMap::new();
    for cierre in finalizados
        .iter()
        .filter(|f| rango.contiene(f.fecha_finalizacion))
    {
        let Some(costurero_id) = trabajo_costurero.get(&cierre.trabajo_id) else {
            continue;
        };
        let fila = acumulado.entry(*costurero_id).or_default();
        fila.0 += 1;
        fila.1 += cierre.cantidad_producida;
        fila.2 += cierre.cantidad_fallas;
    }

    let nombres: HashMap<i64, String> = costureros
        .iter()
        .map(|c| (c.id, c.nombre_completo()))
        .collect();

    let mut por_costurero: Vec<ProduccionCosturero> = acumulado
        .into_iter()
        .map(|(costurero_id, (trabajos_finalizados, producidas, fallas))| ProduccionCosturero {
            costurero_id,
            nombre: nombres
                .get(&costurero_id)
                .cloned()
                .unwrap_or_else(|| format!("Costurero #{}", costurero_id)),
            trabajos_finalizados,
            producidas,
            fallas,
            tasa_fallas: tasa(fallas, producidas),
        })
        .collect();
    por_costurero.sort_by(|a, b| {
        b.producidas
            .cmp(&a.producidas)
            .then_with(|| a.costurero_id.cmp(&b.costurero_id))
    });

    let total_producidas = por_costurero.iter().map(|c| c.producidas).sum();
    let total_fallas = por_costurero.iter().map(|c| c.fallas).sum();

    let kg_por_unidad: HashMap<i64, f64> = parametros
        .iter()
        .map(|p| (p.id, p.cantidad_tela_necesaria))
        .collect();
    let tela_comprometida_kg = round_to(
        trabajos
            .iter()
            .filter(|t| matches!(t.estado, EstadoTrabajo::Pendiente | EstadoTrabajo::EnProceso))
            .map(|t| t.cantidad as f64 * kg_por_unidad.get(&t.parametros_tela_id).copied().unwrap_or(0.0))
            .sum(),
        3,
    );

    ReporteProduccion {
        rango,
        por_estado,
        por_costurero,
        total_producidas,
        total_fallas,
        tasa_fallas: tasa(total_fallas, total_producidas),
        tela_comprometida_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_costurero::EstadoCosturero;
    use crate::domain::a007_trabajo_finalizado::Calidad;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, day).unwrap()
    }

    fn trabajo(id: i64, costurero_id: i64, cantidad: i64, estado: EstadoTrabajo) -> Trabajo {
        Trabajo {
            id,
            codigo_trabajo: format!("T-{}", id),
            costurero_id,
            parametros_tela_id: 1,
            cantidad,
            estado,
            fecha_inicio: d(1),
            fecha_entrega_estimada: None,
            observaciones: None,
        }
    }

    fn cierre(trabajo_id: i64, day: u32, producidas: i64, fallas: i64) -> TrabajoFinalizado {
        TrabajoFinalizado {
            id: trabajo_id * 10,
            trabajo_id,
            fecha_finalizacion: d(day),
            cantidad_producida: producidas,
            cantidad_fallas: fallas,
            calidad: Calidad::Buena,
            costo_total: None,
            observaciones: None,
        }
    }

    fn costurero(id: i64, nombre: &str) -> Costurero {
        Costurero {
            id,
            nombre: nombre.into(),
            apellido: "Pérez".into(),
            dni: "12345678".into(),
            telefono: None,
            email: None,
            direccion: None,
            fecha_ingreso: d(1),
            estado: EstadoCosturero::Activo,
            tienda_id: 1,
        }
    }

    fn parametros(kg: f64) -> ParametrosTela {
        ParametrosTela {
            id: 1,
            codigo_referencia: "POLO-01".into(),
            nombre_modelo: "Polo básico".into(),
            tipo_tela_recomendada: "Jersey".into(),
            estado_prenda: crate::domain::a004_parametros_tela::EstadoPrenda::Nuevo,
            producto_id: None,
            cantidad_tela_necesaria: kg,
            consumo_tela_por_talla: "{}".into(),
            tiempo_fabricacion_por_unidad: 20.0,
            cantidad_por_medio_dia: None,
            observaciones: None,
        }
    }

    #[test]
    fn counts_per_state_cover_every_state() {
        let trabajos = vec![
            trabajo(1, 1, 50, EstadoTrabajo::Completado),
            trabajo(2, 2, 30, EstadoTrabajo::EnProceso),
            trabajo(3, 2, 20, EstadoTrabajo::Pendiente),
        ];
        let r = reporte_produccion(&trabajos, &[], &[], &[parametros(0.25)], RangoFechas::default());
        assert_eq!(r.por_estado.len(), 4);
        assert_eq!(r.por_estado[0].trabajos, 1);
        assert_eq!(r.por_estado[0].unidades, 20);
        assert_eq!(r.por_estado[3].trabajos, 0);
        assert_eq!(r.tela_comprometida_kg, 12.5);
    }

    #[test]
    fn units_and_defects_per_seamstress() {
        let trabajos = vec![
            trabajo(1, 1, 50, EstadoTrabajo::Completado),
            trabajo(2, 2, 30, EstadoTrabajo::Completado),
            trabajo(3, 1, 10, EstadoTrabajo::Completado),
        ];
        let cierres = vec![cierre(1, 5, 48, 2), cierre(2, 6, 30, 0), cierre(3, 28, 10, 0)];
        let costureros = vec![costurero(1, "Rosa"), costurero(2, "Juana")];

        let rango = RangoFechas::new(Some(d(1)), Some(d(15)));
        let r = reporte_produccion(&trabajos, &cierres, &costureros, &[], rango);
        assert_eq!(r.por_costurero.len(), 2);
        assert_eq!(r.por_costurero[0].nombre, "Rosa Pérez");
        assert_eq!(r.por_costurero[0].producidas, 48);
        assert_eq!(r.por_costurero[0].tasa_fallas, 4.0);
        assert_eq!(r.total_producidas, 78);
        assert_eq!(r.total_fallas, 2);
        assert_eq!(r.tasa_fallas, 2.5);
    }
}
