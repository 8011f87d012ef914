use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::fecha;
use crate::form_enum;
use crate::shared::resource::{CachePolicy, Resource};

form_enum! {
    pub enum EstadoTrabajo {
        Pendiente => ("PENDIENTE", "Pendiente"),
        EnProceso => ("EN_PROCESO", "En proceso"),
        Completado => ("COMPLETADO", "Completado"),
        Cancelado => ("CANCELADO", "Cancelado"),
    }
}

impl EstadoTrabajo {
    /// Transiciones permitidas desde el estado actual.
    pub fn siguientes(self) -> &'static [EstadoTrabajo] {
        match self {
            EstadoTrabajo::Pendiente => &[EstadoTrabajo::EnProceso, EstadoTrabajo::Cancelado],
            EstadoTrabajo::EnProceso => &[EstadoTrabajo::Completado, EstadoTrabajo::Cancelado],
            EstadoTrabajo::Completado | EstadoTrabajo::Cancelado => &[],
        }
    }

    pub fn puede_pasar_a(self, next: EstadoTrabajo) -> bool {
        self == next || self.siguientes().contains(&next)
    }

    pub fn es_final(self) -> bool {
        self.siguientes().is_empty()
    }
}

/// Trabajo de confección asignado a un costurero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trabajo {
    pub id: i64,
    pub codigo_trabajo: String,
    pub costurero_id: i64,
    pub parametros_tela_id: i64,
    pub cantidad: i64,
    pub estado: EstadoTrabajo,
    #[serde(deserialize_with = "fecha::date")]
    pub fecha_inicio: NaiveDate,
    #[serde(default, deserialize_with = "fecha::opt_date")]
    pub fecha_entrega_estimada: Option<NaiveDate>,
    #[serde(default)]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrabajoDto {
    pub codigo_trabajo: String,
    pub costurero_id: i64,
    pub parametros_tela_id: i64,
    pub cantidad: i64,
    pub estado: EstadoTrabajo,
    pub fecha_inicio: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_entrega_estimada: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrabajoDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_trabajo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costurero_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parametros_tela_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cantidad: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoTrabajo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_entrega_estimada: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<Option<String>>,
}

impl UpdateTrabajoDto {
    /// PATCH que solo cambia el estado.
    pub fn estado(estado: EstadoTrabajo) -> Self {
        Self {
            estado: Some(estado),
            ..Default::default()
        }
    }
}

impl From<CreateTrabajoDto> for UpdateTrabajoDto {
    fn from(dto: CreateTrabajoDto) -> Self {
        Self {
            codigo_trabajo: Some(dto.codigo_trabajo),
            costurero_id: Some(dto.costurero_id),
            parametros_tela_id: Some(dto.parametros_tela_id),
            cantidad: Some(dto.cantidad),
            estado: Some(dto.estado),
            fecha_inicio: Some(dto.fecha_inicio),
            fecha_entrega_estimada: Some(dto.fecha_entrega_estimada),
            observaciones: Some(dto.observaciones),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrabajoFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoTrabajo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costurero_id: Option<i64>,
}

pub struct Trabajos;

impl Resource for Trabajos {
    type Entity = Trabajo;
    type CreateDto = CreateTrabajoDto;
    type UpdateDto = UpdateTrabajoDto;
    type ListParams = TrabajoFilters;

    const KEY: &'static str = "trabajos";
    const PATH: &'static str = "/trabajos";
    const POLICY: CachePolicy = CachePolicy::OPERATIONAL;
    const DEPENDENTS: &'static [&'static str] = &["reporte-produccion"];
    const ELEMENT_NAME: &'static str = "Trabajo";
    const LIST_NAME: &'static str = "Trabajos";

    fn id(entity: &Trabajo) -> i64 {
        entity.id
    }

    fn label(entity: &Trabajo) -> String {
        format!("{} ({} u.)", entity.codigo_trabajo, entity.cantidad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_machine() {
        use EstadoTrabajo::*;
        assert!(Pendiente.puede_pasar_a(EnProceso));
        assert!(EnProceso.puede_pasar_a(Completado));
        assert!(!Pendiente.puede_pasar_a(Completado));
        assert!(!Completado.puede_pasar_a(EnProceso));
        assert!(Cancelado.es_final());
        assert!(!EnProceso.es_final());
    }

    #[test]
    fn estado_patch_only_sends_estado() {
        let json = serde_json::to_value(UpdateTrabajoDto::estado(EstadoTrabajo::EnProceso)).unwrap();
        assert_eq!(json, serde_json::json!({ "estado": "EN_PROCESO" }));
    }
}
