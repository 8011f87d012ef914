use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form_enum;
use crate::shared::form::round_to;
use crate::shared::resource::{CachePolicy, NoDto, Resource};

form_enum! {
    pub enum EstadoPedido {
        Pendiente => ("PENDIENTE", "Pendiente"),
        Confirmado => ("CONFIRMADO", "Confirmado"),
        Enviado => ("ENVIADO", "Enviado"),
        Entregado => ("ENTREGADO", "Entregado"),
        Cancelado => ("CANCELADO", "Cancelado"),
    }
}

impl EstadoPedido {
    pub fn siguientes(self) -> &'static [EstadoPedido] {
        use EstadoPedido::*;
        match self {
            Pendiente => &[Confirmado, Cancelado],
            Confirmado => &[Enviado, Cancelado],
            Enviado => &[Entregado],
            Entregado | Cancelado => &[],
        }
    }

    pub fn es_final(self) -> bool {
        self.siguientes().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarritoItem {
    pub producto_id: i64,
    pub cantidad: i64,
    pub precio_unitario: f64,
}

impl CarritoItem {
    pub fn subtotal(&self) -> f64 {
        round_to(self.cantidad as f64 * self.precio_unitario, 2)
    }
}

/// Pedido hecho desde la tienda web
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrito {
    pub id: i64,
    pub cliente_nombre: String,
    #[serde(default)]
    pub cliente_telefono: Option<String>,
    #[serde(default)]
    pub cliente_email: Option<String>,
    #[serde(default)]
    pub direccion_entrega: Option<String>,
    pub estado: EstadoPedido,
    #[serde(default)]
    pub items: Vec<CarritoItem>,
    pub total: f64,
    #[serde(default)]
    pub notas: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Carrito {
    /// Total recalculado a partir de las líneas.
    pub fn total_items(&self) -> f64 {
        round_to(self.items.iter().map(CarritoItem::subtotal).sum(), 2)
    }
}

/// El panel solo cambia el estado (y las notas) de un pedido.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarritoDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoPedido>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
}

impl UpdateCarritoDto {
    pub fn estado(estado: EstadoPedido) -> Self {
        Self {
            estado: Some(estado),
            notas: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarritoFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoPedido>,
}

pub struct Carritos;

impl Resource for Carritos {
    type Entity = Carrito;
    type CreateDto = NoDto;
    type UpdateDto = UpdateCarritoDto;
    type ListParams = CarritoFilters;

    const KEY: &'static str = "carritos";
    const PATH: &'static str = "/carritos";
    const POLICY: CachePolicy = CachePolicy::TRANSACTIONAL;
    const ELEMENT_NAME: &'static str = "Pedido";
    const LIST_NAME: &'static str = "Pedidos web";

    fn id(entity: &Carrito) -> i64 {
        entity.id
    }

    fn label(entity: &Carrito) -> String {
        format!("Pedido #{} de {}", entity.id, entity.cliente_nombre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_machine() {
        assert_eq!(
            EstadoPedido::Pendiente.siguientes(),
            &[EstadoPedido::Confirmado, EstadoPedido::Cancelado]
        );
        assert!(EstadoPedido::Entregado.es_final());
        assert!(!EstadoPedido::Enviado.es_final());
    }

    #[test]
    fn change_estado_body() {
        let json = serde_json::to_value(UpdateCarritoDto::estado(EstadoPedido::Enviado)).unwrap();
        assert_eq!(json, serde_json::json!({ "estado": "ENVIADO" }));
    }

    #[test]
    fn decodes_order_from_backend() {
        let json = r#"{
            "id": 3,
            "clienteNombre": "Lucía",
            "estado": "PENDIENTE",
            "items": [
                {"productoId": 1, "cantidad": 2, "precioUnitario": 30.5},
                {"productoId": 2, "cantidad": 1, "precioUnitario": 15}
            ],
            "total": 76,
            "createdAt": "2024-07-01T12:00:00Z"
        }"#;
        let carrito: Carrito = serde_json::from_str(json).unwrap();
        assert_eq!(carrito.total_items(), 76.0);
        assert!(carrito.created_at.is_some());
        assert_eq!(Carritos::label(&carrito), "Pedido #3 de Lucía");
    }
}
