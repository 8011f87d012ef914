//! Consumo de tela por talla.
//!
//! El backend guarda el mapa talla → kg como un string JSON. En el formulario
//! cada talla es un input de texto; solo se serializan las tallas con un
//! valor numérico mayor que cero, redondeado a 3 decimales.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

use crate::shared::form::{parse_decimal, round_to};

/// Orden en que se muestran las tallas en el editor.
pub const TALLAS: &[&str] = &[
    "XS", "S", "M", "L", "XL", "XXL", "2", "4", "6", "8", "10", "12", "14", "16",
];

const DECIMALES: u32 = 3;

/// Mapa normalizado talla → kg (todos los valores > 0).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsumoPorTalla(BTreeMap<String, f64>);

impl ConsumoPorTalla {
    pub fn get(&self, talla: &str) -> Option<f64> {
        self.0.get(talla).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Suma de todas las tallas.
    pub fn total(&self) -> f64 {
        round_to(self.0.values().sum(), DECIMALES)
    }

    fn insert_if_positive(&mut self, talla: &str, value: f64) {
        if value.is_finite() && value > 0.0 {
            let rounded = round_to(value, DECIMALES);
            if rounded > 0.0 {
                self.0.insert(talla.trim().to_string(), rounded);
            }
        }
    }

    pub fn to_json(&self) -> String {
        let map: Map<String, Value> = self
            .0
            .iter()
            .filter_map(|(k, v)| Number::from_f64(*v).map(|n| (k.clone(), Value::Number(n))))
            .collect();
        Value::Object(map).to_string()
    }
}

/// Inputs del editor (talla → texto) a mapa normalizado.
pub fn consumo_from_inputs(inputs: &BTreeMap<String, String>) -> ConsumoPorTalla {
    let mut consumo = ConsumoPorTalla::default();
    for (talla, raw) in inputs {
        if talla.trim().is_empty() {
            continue;
        }
        if let Ok(Some(value)) = parse_decimal(raw) {
            consumo.insert_if_positive(talla, value);
        }
    }
    consumo
}

pub fn serialize_consumo(inputs: &BTreeMap<String, String>) -> String {
    consumo_from_inputs(inputs).to_json()
}

/// Lee el string JSON guardado. Acepta números o strings numéricos; descarta
/// entradas en cero o inválidas. Un JSON ilegible se trata como vacío.
pub fn parse_consumo(json: &str) -> ConsumoPorTalla {
    let mut consumo = ConsumoPorTalla::default();
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(json) else {
        return consumo;
    };
    for (talla, value) in map {
        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_decimal(&s).ok().flatten(),
            _ => None,
        };
        if let Some(number) = number {
            consumo.insert_if_positive(&talla, number);
        }
    }
    consumo
}

/// Mapa normalizado de vuelta a inputs de texto, con todas las tallas
/// conocidas presentes (vacías si no tienen consumo).
pub fn consumo_to_inputs(consumo: &ConsumoPorTalla) -> BTreeMap<String, String> {
    let mut inputs: BTreeMap<String, String> = TALLAS
        .iter()
        .map(|t| (t.to_string(), String::new()))
        .collect();
    for (talla, value) in consumo.iter() {
        inputs.insert(talla.to_string(), value.to_string());
    }
    inputs
}

/// Acepta `consumoTelaPorTalla` como string JSON o como objeto.
pub(crate) fn json_string_or_object<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => "{}".to_string(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn serialize_keeps_only_positive_rounded_values() {
        let json = serialize_consumo(&inputs(&[
            ("S", "0.45678"),
            ("M", "0"),
            ("L", ""),
            ("XL", "abc"),
            ("XXL", "-1"),
            ("2", "0,3"),
        ]));
        let parsed = parse_consumo(&json);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.get("S"), Some(0.457));
        assert_eq!(parsed.get("2"), Some(0.3));
        assert_eq!(parsed.get("M"), None);
    }

    #[test]
    fn round_trip_is_stable() {
        let original = inputs(&[("XS", "0.1234"), ("M", "1.5"), ("L", "0.0001")]);
        let once = parse_consumo(&serialize_consumo(&original));
        let twice = parse_consumo(&once.to_json());
        assert_eq!(once, twice);
        // 0.0001 rounds to zero and is dropped
        assert_eq!(once.len(), 2);
        assert_eq!(once.get("XS"), Some(0.123));
    }

    #[test]
    fn parse_tolerates_strings_and_garbage() {
        let parsed = parse_consumo(r#"{"S":"0.5","M":0,"L":null,"XL":1.25}"#);
        assert_eq!(parsed.get("S"), Some(0.5));
        assert_eq!(parsed.get("XL"), Some(1.25));
        assert_eq!(parsed.len(), 2);
        assert!(parse_consumo("not json").is_empty());
        assert!(parse_consumo("[1,2]").is_empty());
    }

    #[test]
    fn total_sums_sizes() {
        let consumo = parse_consumo(r#"{"S":0.4,"M":0.45,"L":0.5}"#);
        assert_eq!(consumo.total(), 1.35);
    }

    #[test]
    fn inputs_list_every_known_size() {
        let consumo = parse_consumo(r#"{"M":0.45}"#);
        let inputs = consumo_to_inputs(&consumo);
        assert_eq!(inputs.len(), TALLAS.len());
        assert_eq!(inputs["M"], "0.45");
        assert_eq!(inputs["S"], "");
    }

    #[test]
    fn empty_editor_serializes_to_empty_object() {
        assert_eq!(serialize_consumo(&BTreeMap::new()), "{}");
    }
}
