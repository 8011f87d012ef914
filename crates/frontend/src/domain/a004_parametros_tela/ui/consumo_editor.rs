//! Grid of sizes; each keystroke rewrites the JSON field of the form.

use std::collections::BTreeMap;

use contracts::domain::a004_parametros_tela::consumo::{
    consumo_from_inputs, consumo_to_inputs, parse_consumo, serialize_consumo, TALLAS,
};
use contracts::domain::a004_parametros_tela::form::CONSUMO_FIELD;
use leptos::prelude::*;

use crate::shared::form::{field_error, FormCtx};
use crate::shared::number_format::format_number_with_decimals;

/// Known sizes first, then any extra size found in stored data.
fn ordered_sizes(inputs: &BTreeMap<String, String>) -> Vec<String> {
    let mut sizes: Vec<String> = TALLAS.iter().map(|t| t.to_string()).collect();
    for talla in inputs.keys() {
        if !sizes.contains(talla) {
            sizes.push(talla.clone());
        }
    }
    sizes
}

#[component]
pub fn ConsumoEditor(form: FormCtx) -> impl IntoView {
    let initial = form
        .values
        .with_untracked(|v| consumo_to_inputs(&parse_consumo(v.get(CONSUMO_FIELD))));
    let sizes = ordered_sizes(&initial);
    let inputs = RwSignal::new(initial);

    let set_size = move |talla: String, value: String| {
        inputs.update(|map| {
            map.insert(talla, value);
        });
        form.set(CONSUMO_FIELD, inputs.with_untracked(serialize_consumo));
    };

    let resumen = move || {
        let consumo = inputs.with(consumo_from_inputs);
        if consumo.is_empty() {
            "Sin consumo registrado".to_string()
        } else {
            format!(
                "{} tallas · promedio {} kg por unidad",
                consumo.len(),
                format_number_with_decimals(consumo.total() / consumo.len() as f64, 3)
            )
        }
    };

    view! {
        <div class="form-group">
            <label class="form-group__label">"Consumo de tela por talla (kg) *"</label>
            <div class="consumo-grid">
                {sizes.into_iter().map(|talla| {
                    let key = talla.clone();
                    let for_input = talla.clone();
                    view! {
                        <label class="consumo-grid__cell">
                            <span class="consumo-grid__size">{talla}</span>
                            <input
                                type="number"
                                step="0.001"
                                min="0"
                                class="form-group__input"
                                prop:value=move || inputs.with(|m| m.get(&key).cloned().unwrap_or_default())
                                on:input=move |ev| set_size(for_input.clone(), event_target_value(&ev))
                            />
                        </label>
                    }
                }).collect_view()}
            </div>
            <div class="form-group__hint">{resumen}</div>
            {field_error(form, CONSUMO_FIELD)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_extra_sizes_are_appended() {
        let mut inputs = consumo_to_inputs(&parse_consumo(r#"{"3XL":0.8}"#));
        inputs.insert("M".into(), "0.5".into());
        let sizes = ordered_sizes(&inputs);
        assert_eq!(sizes.first().map(String::as_str), Some("XS"));
        assert_eq!(sizes.last().map(String::as_str), Some("3XL"));
        assert_eq!(sizes.len(), TALLAS.len() + 1);
    }
}
