//! Editor de líneas de venta: filas en texto mientras se editan.

use serde::{Deserialize, Serialize};

use crate::shared::form::{parse_decimal, parse_integer, round_to};

use super::aggregate::{total_items, VentaItem};

pub const ITEMS_FIELD: &str = "items";

/// Una fila del editor tal como la escribe el usuario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineaInput {
    pub producto_id: String,
    pub cantidad: String,
    pub precio_unitario: String,
}

impl LineaInput {
    pub fn from_item(item: &VentaItem) -> Self {
        Self {
            producto_id: item.producto_id.to_string(),
            cantidad: item.cantidad.to_string(),
            precio_unitario: item.precio_unitario.to_string(),
        }
    }

    /// Subtotal mostrado en vivo; `None` mientras la fila está incompleta.
    pub fn subtotal(&self) -> Option<f64> {
        let cantidad = parse_integer(&self.cantidad).ok()??;
        let precio = parse_decimal(&self.precio_unitario).ok()??;
        Some(round_to(cantidad as f64 * precio, 2))
    }
}

/// Total en vivo de las filas completas.
pub fn total_lineas(lineas: &[LineaInput]) -> f64 {
    round_to(lineas.iter().filter_map(LineaInput::subtotal).sum(), 2)
}

pub fn serialize_lineas(lineas: &[LineaInput]) -> String {
    serde_json::to_string(lineas).unwrap_or_else(|_| "[]".to_string())
}

pub fn parse_lineas(raw: &str) -> Vec<LineaInput> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Convierte las filas en ítems; el error describe la primera fila inválida.
pub fn build_items(lineas: &[LineaInput]) -> Result<Vec<VentaItem>, String> {
    let mut items = Vec::with_capacity(lineas.len());
    for (idx, linea) in lineas.iter().enumerate() {
        let fila = idx + 1;
        let producto_id = match parse_integer(&linea.producto_id) {
            Ok(Some(id)) if id > 0 => id,
            _ => return Err(format!("Fila {}: seleccione un producto", fila)),
        };
        let cantidad = match parse_integer(&linea.cantidad) {
            Ok(Some(c)) if c > 0 => c,
            _ => return Err(format!("Fila {}: la cantidad debe ser mayor que 0", fila)),
        };
        let precio = match parse_decimal(&linea.precio_unitario) {
            Ok(Some(p)) if p >= 0.0 => p,
            _ => return Err(format!("Fila {}: precio unitario inválido", fila)),
        };
        items.push(VentaItem::new(producto_id, cantidad, precio));
    }
    if items.is_empty() {
        return Err("Agregue al menos un producto".to_string());
    }
    Ok(items)
}

/// Ítems y total listos para el cuerpo de la petición.
pub fn build_venta(lineas: &[LineaInput]) -> Result<(Vec<VentaItem>, f64), String> {
    let items = build_items(lineas)?;
    let total = total_items(&items);
    Ok((items, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linea(producto: &str, cantidad: &str, precio: &str) -> LineaInput {
        LineaInput {
            producto_id: producto.into(),
            cantidad: cantidad.into(),
            precio_unitario: precio.into(),
        }
    }

    #[test]
    fn live_total_skips_incomplete_rows() {
        let lineas = vec![linea("1", "2", "25,50"), linea("2", "", "10")];
        assert_eq!(lineas[0].subtotal(), Some(51.0));
        assert_eq!(lineas[1].subtotal(), None);
        assert_eq!(total_lineas(&lineas), 51.0);
    }

    #[test]
    fn build_reports_first_bad_row() {
        let lineas = vec![linea("1", "1", "10"), linea("2", "0", "10")];
        assert_eq!(
            build_items(&lineas).unwrap_err(),
            "Fila 2: la cantidad debe ser mayor que 0"
        );
        assert!(build_items(&[]).is_err());
    }

    #[test]
    fn total_matches_sum_of_subtotals() {
        let lineas = vec![linea("1", "2", "35"), linea("4", "1", "12.5")];
        let (items, total) = build_venta(&lineas).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].subtotal, 12.5);
        assert_eq!(total, 82.5);
    }
}
