use crate::shared::form::round_to;

/// Importe de un lote: el explícito si se indicó, si no `precioKG × pesoGrupo`.
///
/// Devuelve `None` cuando faltan datos para calcularlo.
pub fn compute_importe(
    precio_kg: Option<f64>,
    peso_grupo: Option<f64>,
    explicit: Option<f64>,
) -> Option<f64> {
    if explicit.is_some() {
        return explicit;
    }
    match (precio_kg, peso_grupo) {
        (Some(precio), Some(peso)) => Some(round_to(precio * peso, 2)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computed_from_price_and_weight() {
        assert_eq!(compute_importe(Some(10.0), Some(5.0), None), Some(50.0));
        assert_eq!(compute_importe(Some(12.5), Some(4.2), None), Some(52.5));
    }

    #[test]
    fn explicit_value_wins() {
        assert_eq!(compute_importe(Some(10.0), Some(5.0), Some(48.0)), Some(48.0));
    }

    #[test]
    fn missing_inputs_yield_nothing() {
        assert_eq!(compute_importe(None, Some(5.0), None), None);
        assert_eq!(compute_importe(Some(10.0), None, None), None);
    }
}
