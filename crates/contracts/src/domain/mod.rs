//! Agregados del negocio: uno por carpeta, numerados como en el menú.

pub mod a001_proveedor;
pub mod a002_tela;
pub mod a003_inventario_tela;
pub mod a004_parametros_tela;
pub mod a005_costurero;
pub mod a006_trabajo;
pub mod a007_trabajo_finalizado;
pub mod a008_categoria;
pub mod a009_producto;
pub mod a010_tienda;
pub mod a011_sucursal;
pub mod a012_inventario_tienda;
pub mod a013_inventario_sucursal;
pub mod a014_venta;
pub mod a015_carrito;
pub mod a016_config_web;

/// `#[serde(default = ...)]` para banderas `activo` que el backend omite.
pub(crate) fn default_true() -> bool {
    true
}

/// Fila de stock de un producto en una ubicación (tienda o sucursal).
pub trait Existencia {
    fn producto_id(&self) -> i64;
    fn stock(&self) -> i64;
    fn stock_minimo(&self) -> i64;
    /// Tienda o sucursal a la que pertenece la fila.
    fn ubicacion_id(&self) -> i64;

    fn bajo_minimo(&self) -> bool {
        self.stock() < self.stock_minimo()
    }

    /// Unidades que faltan para llegar al mínimo.
    fn faltante(&self) -> i64 {
        (self.stock_minimo() - self.stock()).max(0)
    }
}

/// Fechas que el backend puede enviar como `2024-03-15` o como datetime ISO.
pub(crate) mod fecha {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    use crate::shared::form::parse_date;

    pub fn date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw)
            .map_err(serde::de::Error::custom)?
            .ok_or_else(|| serde::de::Error::custom("fecha vacía"))
    }

    pub fn opt_date<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_date(&raw).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
