use serde::{Deserialize, Serialize};

use crate::domain::default_true;
use crate::shared::config::DEFAULT_TIENDA_ID;
use crate::shared::resource::{CachePolicy, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    /// data URI o URL
    pub imagen: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enlace: Option<String>,
    #[serde(default)]
    pub orden: i64,
    #[serde(default = "default_true")]
    pub activo: bool,
}

/// Apariencia de la tienda web (una por tienda)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigWeb {
    pub id: i64,
    pub tienda_id: i64,
    pub nombre_sitio: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub color_primario: String,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub email_contacto: Option<String>,
    #[serde(default)]
    pub banners: Vec<Banner>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConfigWebDto {
    pub tienda_id: i64,
    pub nombre_sitio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub color_primario: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_contacto: Option<String>,
    pub banners: Vec<Banner>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfigWebDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_sitio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_primario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_contacto: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banners: Option<Vec<Banner>>,
}

impl From<CreateConfigWebDto> for UpdateConfigWebDto {
    fn from(dto: CreateConfigWebDto) -> Self {
        Self {
            nombre_sitio: Some(dto.nombre_sitio),
            logo: Some(dto.logo),
            color_primario: Some(dto.color_primario),
            whatsapp: Some(dto.whatsapp),
            email_contacto: Some(dto.email_contacto),
            banners: Some(dto.banners),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigWebParams {
    pub tienda_id: i64,
}

impl Default for ConfigWebParams {
    fn default() -> Self {
        Self {
            tienda_id: DEFAULT_TIENDA_ID,
        }
    }
}

pub struct ConfigsWeb;

impl Resource for ConfigsWeb {
    type Entity = ConfigWeb;
    type CreateDto = CreateConfigWebDto;
    type UpdateDto = UpdateConfigWebDto;
    type ListParams = ConfigWebParams;

    const KEY: &'static str = "config-web";
    const PATH: &'static str = "/config-web";
    const POLICY: CachePolicy = CachePolicy::CATALOG;
    const ELEMENT_NAME: &'static str = "Configuración web";
    const LIST_NAME: &'static str = "Configuración web";

    fn id(entity: &ConfigWeb) -> i64 {
        entity.id
    }

    fn label(entity: &ConfigWeb) -> String {
        entity.nombre_sitio.clone()
    }
}
