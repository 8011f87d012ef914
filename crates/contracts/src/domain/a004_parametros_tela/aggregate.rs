use serde::{Deserialize, Serialize};

use crate::form_enum;
use crate::shared::resource::{CachePolicy, Resource};

use super::consumo::json_string_or_object;

form_enum! {
    /// Estado del modelo de prenda
    pub enum EstadoPrenda {
        Nuevo => ("NUEVO", "Nuevo"),
        EnProduccion => ("EN_PRODUCCION", "En producción"),
        Descontinuado => ("DESCONTINUADO", "Descontinuado"),
    }
}

/// Parámetros de producción de un modelo de prenda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParametrosTela {
    pub id: i64,
    pub codigo_referencia: String,
    pub nombre_modelo: String,
    pub tipo_tela_recomendada: String,
    pub estado_prenda: EstadoPrenda,
    #[serde(default)]
    pub producto_id: Option<i64>,
    /// kg por unidad, promedio de todas las tallas
    pub cantidad_tela_necesaria: f64,
    /// JSON `{"S": 0.45, "M": 0.5}`
    #[serde(default, deserialize_with = "json_string_or_object")]
    pub consumo_tela_por_talla: String,
    /// minutos por unidad
    pub tiempo_fabricacion_por_unidad: f64,
    #[serde(default)]
    pub cantidad_por_medio_dia: Option<i64>,
    #[serde(default)]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParametrosTelaDto {
    pub codigo_referencia: String,
    pub nombre_modelo: String,
    pub tipo_tela_recomendada: String,
    pub estado_prenda: EstadoPrenda,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producto_id: Option<i64>,
    pub cantidad_tela_necesaria: f64,
    pub consumo_tela_por_talla: String,
    pub tiempo_fabricacion_por_unidad: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cantidad_por_medio_dia: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParametrosTelaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_referencia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_modelo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_tela_recomendada: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado_prenda: Option<EstadoPrenda>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producto_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cantidad_tela_necesaria: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumo_tela_por_talla: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiempo_fabricacion_por_unidad: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cantidad_por_medio_dia: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<Option<String>>,
}

impl From<CreateParametrosTelaDto> for UpdateParametrosTelaDto {
    fn from(dto: CreateParametrosTelaDto) -> Self {
        Self {
            codigo_referencia: Some(dto.codigo_referencia),
            nombre_modelo: Some(dto.nombre_modelo),
            tipo_tela_recomendada: Some(dto.tipo_tela_recomendada),
            estado_prenda: Some(dto.estado_prenda),
            producto_id: Some(dto.producto_id),
            cantidad_tela_necesaria: Some(dto.cantidad_tela_necesaria),
            consumo_tela_por_talla: Some(dto.consumo_tela_por_talla),
            tiempo_fabricacion_por_unidad: Some(dto.tiempo_fabricacion_por_unidad),
            cantidad_por_medio_dia: Some(dto.cantidad_por_medio_dia),
            observaciones: Some(dto.observaciones),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParametrosTelaFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado_prenda: Option<EstadoPrenda>,
}

pub struct ParametrosTelas;

impl Resource for ParametrosTelas {
    type Entity = ParametrosTela;
    type CreateDto = CreateParametrosTelaDto;
    type UpdateDto = UpdateParametrosTelaDto;
    type ListParams = ParametrosTelaFilters;

    const KEY: &'static str = "parametros-tela";
    const PATH: &'static str = "/parametros-fisicos-tela";
    const POLICY: CachePolicy = CachePolicy::CATALOG;
    const DEPENDENTS: &'static [&'static str] = &["trabajos", "reporte-produccion"];
    const ELEMENT_NAME: &'static str = "Modelo de prenda";
    const LIST_NAME: &'static str = "Parámetros de prenda";

    fn id(entity: &ParametrosTela) -> i64 {
        entity.id
    }

    fn label(entity: &ParametrosTela) -> String {
        format!("{} · {}", entity.codigo_referencia, entity.nombre_modelo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumo_accepts_string_or_object() {
        let base = r#""id":1,"codigoReferencia":"PL-01","nombreModelo":"Polo","tipoTelaRecomendada":"Jersey","estadoPrenda":"NUEVO","cantidadTelaNecesaria":0.5,"tiempoFabricacionPorUnidad":12"#;

        let as_string: ParametrosTela =
            serde_json::from_str(&format!(r#"{{{},"consumoTelaPorTalla":"{{\"M\":0.5}}"}}"#, base))
                .unwrap();
        assert_eq!(as_string.consumo_tela_por_talla, r#"{"M":0.5}"#);

        let as_object: ParametrosTela =
            serde_json::from_str(&format!(r#"{{{},"consumoTelaPorTalla":{{"M":0.5}}}}"#, base))
                .unwrap();
        assert_eq!(as_object.consumo_tela_por_talla, r#"{"M":0.5}"#);

        let missing: ParametrosTela = serde_json::from_str(&format!("{{{}}}", base)).unwrap();
        assert_eq!(missing.consumo_tela_por_talla, "");
    }
}
