use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::fecha;
use crate::form_enum;
use crate::shared::form::round_to;
use crate::shared::resource::{CachePolicy, Resource};

form_enum! {
    pub enum MetodoPago {
        Efectivo => ("EFECTIVO", "Efectivo"),
        Tarjeta => ("TARJETA", "Tarjeta"),
        Transferencia => ("TRANSFERENCIA", "Transferencia"),
        YapePlin => ("YAPE_PLIN", "Yape / Plin"),
    }
}

form_enum! {
    pub enum EstadoVenta {
        Completada => ("COMPLETADA", "Completada"),
        Anulada => ("ANULADA", "Anulada"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VentaItem {
    pub producto_id: i64,
    pub cantidad: i64,
    pub precio_unitario: f64,
    #[serde(default)]
    pub subtotal: f64,
}

impl VentaItem {
    pub fn new(producto_id: i64, cantidad: i64, precio_unitario: f64) -> Self {
        Self {
            producto_id,
            cantidad,
            precio_unitario,
            subtotal: round_to(cantidad as f64 * precio_unitario, 2),
        }
    }

    /// Subtotal enviado por el backend o, si falta, el calculado.
    pub fn importe(&self) -> f64 {
        if self.subtotal > 0.0 {
            self.subtotal
        } else {
            round_to(self.cantidad as f64 * self.precio_unitario, 2)
        }
    }
}

/// Suma de subtotales redondeada a céntimos.
pub fn total_items(items: &[VentaItem]) -> f64 {
    round_to(items.iter().map(VentaItem::importe).sum(), 2)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venta {
    pub id: i64,
    #[serde(deserialize_with = "fecha::date")]
    pub fecha: NaiveDate,
    pub tienda_id: i64,
    #[serde(default)]
    pub sucursal_id: Option<i64>,
    #[serde(default)]
    pub usuario_id: Option<i64>,
    #[serde(default)]
    pub cliente: Option<String>,
    pub metodo_pago: MetodoPago,
    pub estado: EstadoVenta,
    pub total: f64,
    #[serde(default)]
    pub items: Vec<VentaItem>,
}

impl Venta {
    pub fn es_valida(&self) -> bool {
        self.estado == EstadoVenta::Completada
    }

    pub fn unidades(&self) -> i64 {
        self.items.iter().map(|i| i.cantidad).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVentaDto {
    pub fecha: NaiveDate,
    pub tienda_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sucursal_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente: Option<String>,
    pub metodo_pago: MetodoPago,
    pub estado: EstadoVenta,
    pub total: f64,
    pub items: Vec<VentaItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVentaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sucursal_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metodo_pago: Option<MetodoPago>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoVenta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<VentaItem>>,
}

impl UpdateVentaDto {
    pub fn anular() -> Self {
        Self {
            estado: Some(EstadoVenta::Anulada),
            ..Default::default()
        }
    }
}

impl From<CreateVentaDto> for UpdateVentaDto {
    fn from(dto: CreateVentaDto) -> Self {
        Self {
            fecha: Some(dto.fecha),
            sucursal_id: Some(dto.sucursal_id),
            cliente: Some(dto.cliente),
            metodo_pago: Some(dto.metodo_pago),
            estado: Some(dto.estado),
            total: Some(dto.total),
            items: Some(dto.items),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VentaFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_desde: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hasta: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metodo_pago: Option<MetodoPago>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoVenta>,
}

pub struct Ventas;

impl Resource for Ventas {
    type Entity = Venta;
    type CreateDto = CreateVentaDto;
    type UpdateDto = UpdateVentaDto;
    type ListParams = VentaFilters;

    const KEY: &'static str = "ventas";
    const PATH: &'static str = "/ventas";
    const POLICY: CachePolicy = CachePolicy::TRANSACTIONAL;
    // el backend descuenta stock al registrar una venta
    const DEPENDENTS: &'static [&'static str] = &[
        "reporte-ventas",
        "productos",
        "inventario-tienda",
        "inventario-sucursal",
        "reporte-inventario",
    ];
    const ELEMENT_NAME: &'static str = "Venta";
    const LIST_NAME: &'static str = "Ventas";

    fn id(entity: &Venta) -> i64 {
        entity.id
    }

    fn label(entity: &Venta) -> String {
        format!("Venta #{} del {}", entity.id, entity.fecha.format("%d.%m.%Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_datetimes_are_accepted() {
        let json = r#"{
            "id": 12,
            "fecha": "2024-05-02T15:30:00.000Z",
            "tiendaId": 1,
            "metodoPago": "YAPE_PLIN",
            "estado": "COMPLETADA",
            "total": 90.0,
            "items": [{"productoId": 3, "cantidad": 2, "precioUnitario": 45.0}]
        }"#;
        let venta: Venta = serde_json::from_str(json).unwrap();
        assert_eq!(venta.fecha, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_eq!(venta.metodo_pago, MetodoPago::YapePlin);
        assert_eq!(venta.items[0].importe(), 90.0);
        assert_eq!(venta.unidades(), 2);
    }

    #[test]
    fn anular_only_sends_estado() {
        let json = serde_json::to_value(UpdateVentaDto::anular()).unwrap();
        assert_eq!(json, serde_json::json!({ "estado": "ANULADA" }));
    }

    #[test]
    fn date_range_query() {
        let filters = VentaFilters {
            fecha_desde: NaiveDate::from_ymd_opt(2024, 1, 1),
            fecha_hasta: NaiveDate::from_ymd_opt(2024, 1, 31),
            ..Default::default()
        };
        assert_eq!(
            Ventas::list_path(&filters),
            "/ventas?fechaDesde=2024-01-01&fechaHasta=2024-01-31"
        );
    }

    #[test]
    fn total_is_sum_of_subtotals() {
        let items = vec![VentaItem::new(1, 3, 19.9), VentaItem::new(2, 1, 0.3)];
        assert_eq!(items[0].subtotal, 59.7);
        assert_eq!(total_items(&items), 60.0);
    }
}
