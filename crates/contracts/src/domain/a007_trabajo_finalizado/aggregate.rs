use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::fecha;
use crate::form_enum;
use crate::shared::resource::{CachePolicy, Resource};

form_enum! {
    pub enum Calidad {
        Excelente => ("EXCELENTE", "Excelente"),
        Buena => ("BUENA", "Buena"),
        Regular => ("REGULAR", "Regular"),
        Deficiente => ("DEFICIENTE", "Deficiente"),
    }
}

/// Cierre de un trabajo: cuánto se produjo y con qué calidad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrabajoFinalizado {
    pub id: i64,
    pub trabajo_id: i64,
    #[serde(deserialize_with = "fecha::date")]
    pub fecha_finalizacion: NaiveDate,
    pub cantidad_producida: i64,
    #[serde(default)]
    pub cantidad_fallas: i64,
    pub calidad: Calidad,
    #[serde(default)]
    pub costo_total: Option<f64>,
    #[serde(default)]
    pub observaciones: Option<String>,
}

impl TrabajoFinalizado {
    /// Porcentaje de fallas sobre el total confeccionado.
    pub fn tasa_fallas(&self) -> f64 {
        let total = self.cantidad_producida + self.cantidad_fallas;
        if total == 0 {
            0.0
        } else {
            self.cantidad_fallas as f64 * 100.0 / total as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrabajoFinalizadoDto {
    pub trabajo_id: i64,
    pub fecha_finalizacion: NaiveDate,
    pub cantidad_producida: i64,
    pub cantidad_fallas: i64,
    pub calidad: Calidad,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costo_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrabajoFinalizadoDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trabajo_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_finalizacion: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cantidad_producida: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cantidad_fallas: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calidad: Option<Calidad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costo_total: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<Option<String>>,
}

impl From<CreateTrabajoFinalizadoDto> for UpdateTrabajoFinalizadoDto {
    fn from(dto: CreateTrabajoFinalizadoDto) -> Self {
        Self {
            trabajo_id: Some(dto.trabajo_id),
            fecha_finalizacion: Some(dto.fecha_finalizacion),
            cantidad_producida: Some(dto.cantidad_producida),
            cantidad_fallas: Some(dto.cantidad_fallas),
            calidad: Some(dto.calidad),
            costo_total: Some(dto.costo_total),
            observaciones: Some(dto.observaciones),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrabajoFinalizadoFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trabajo_id: Option<i64>,
}

pub struct TrabajosFinalizados;

impl Resource for TrabajosFinalizados {
    type Entity = TrabajoFinalizado;
    type CreateDto = CreateTrabajoFinalizadoDto;
    type UpdateDto = UpdateTrabajoFinalizadoDto;
    type ListParams = TrabajoFinalizadoFilters;

    const KEY: &'static str = "trabajos-finalizados";
    const PATH: &'static str = "/trabajos-finalizados";
    const POLICY: CachePolicy = CachePolicy::OPERATIONAL;
    // Finalizar un trabajo cambia su estado en el servidor.
    const DEPENDENTS: &'static [&'static str] = &["trabajos", "reporte-produccion"];
    const ELEMENT_NAME: &'static str = "Trabajo finalizado";
    const LIST_NAME: &'static str = "Trabajos finalizados";

    fn id(entity: &TrabajoFinalizado) -> i64 {
        entity.id
    }

    fn label(entity: &TrabajoFinalizado) -> String {
        format!(
            "Trabajo #{} · {} u.",
            entity.trabajo_id, entity.cantidad_producida
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defect_rate() {
        let t = TrabajoFinalizado {
            id: 1,
            trabajo_id: 1,
            fecha_finalizacion: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            cantidad_producida: 95,
            cantidad_fallas: 5,
            calidad: Calidad::Buena,
            costo_total: None,
            observaciones: None,
        };
        assert_eq!(t.tasa_fallas(), 5.0);
    }
}
