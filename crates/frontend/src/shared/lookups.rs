//! Id → label tables for foreign keys.
//!
//! Reference selects in forms and name columns in lists both read from the
//! same loaded lists, so a renamed supplier shows up everywhere once its
//! list is invalidated.

use std::collections::HashMap;

use contracts::domain::a001_proveedor::aggregate::Proveedores;
use contracts::domain::a002_tela::aggregate::Telas;
use contracts::domain::a004_parametros_tela::aggregate::ParametrosTelas;
use contracts::domain::a005_costurero::aggregate::Costureros;
use contracts::domain::a006_trabajo::aggregate::Trabajos;
use contracts::domain::a008_categoria::aggregate::Categorias;
use contracts::domain::a008_categoria::subcategoria::Subcategorias;
use contracts::domain::a009_producto::aggregate::Productos;
use contracts::domain::a010_tienda::aggregate::Tiendas;
use contracts::domain::a011_sucursal::aggregate::Sucursales;
use contracts::shared::form::SelectOption;
use contracts::shared::resource::Resource;
use leptos::prelude::*;

use super::hooks::use_crud;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookups(HashMap<&'static str, Vec<SelectOption>>);

impl Lookups {
    pub fn options(&self, resource: &str) -> &[SelectOption] {
        self.0.get(resource).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Label of `id` in `resource`, or `#id` while the list is not loaded.
    pub fn label(&self, resource: &str, id: i64) -> String {
        let value = id.to_string();
        self.options(resource)
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| format!("#{}", id))
    }

    pub fn opt_label(&self, resource: &str, id: Option<i64>) -> String {
        id.map(|id| self.label(resource, id)).unwrap_or_default()
    }

    fn insert(&mut self, resource: &'static str, options: Vec<SelectOption>) {
        self.0.insert(resource, options);
    }
}

fn options_of<R: Resource>() -> Signal<Vec<SelectOption>> {
    let crud = use_crud::<R>(Signal::derive(R::ListParams::default));
    Signal::derive(move || {
        crud.data.with(|data| {
            data.as_ref()
                .map(|page| {
                    page.items
                        .iter()
                        .map(|e| SelectOption::new(R::id(e).to_string(), R::label(e)))
                        .collect()
                })
                .unwrap_or_default()
        })
    })
}

fn load(resource: &str) -> Option<(&'static str, Signal<Vec<SelectOption>>)> {
    let loaded = match resource {
        Proveedores::KEY => (Proveedores::KEY, options_of::<Proveedores>()),
        Telas::KEY => (Telas::KEY, options_of::<Telas>()),
        ParametrosTelas::KEY => (ParametrosTelas::KEY, options_of::<ParametrosTelas>()),
        Costureros::KEY => (Costureros::KEY, options_of::<Costureros>()),
        Trabajos::KEY => (Trabajos::KEY, options_of::<Trabajos>()),
        Categorias::KEY => (Categorias::KEY, options_of::<Categorias>()),
        Subcategorias::KEY => (Subcategorias::KEY, options_of::<Subcategorias>()),
        Productos::KEY => (Productos::KEY, options_of::<Productos>()),
        Tiendas::KEY => (Tiendas::KEY, options_of::<Tiendas>()),
        Sucursales::KEY => (Sucursales::KEY, options_of::<Sucursales>()),
        other => {
            log::warn!("no lookup registered for {}", other);
            return None;
        }
    };
    Some(loaded)
}

/// Load every list in `resources` and expose them as one [`Lookups`].
pub fn use_lookups(resources: &[&'static str]) -> Signal<Lookups> {
    let mut keys: Vec<&'static str> = resources.to_vec();
    keys.sort_unstable();
    keys.dedup();

    let sources: Vec<_> = keys.into_iter().filter_map(load).collect();
    Signal::derive(move || {
        let mut lookups = Lookups::default();
        for (key, options) in &sources {
            lookups.insert(key, options.get());
        }
        lookups
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_labels_fall_back_to_the_id() {
        let mut lookups = Lookups::default();
        lookups.insert("telas", vec![SelectOption::new("3", "Jersey 30/1")]);
        assert_eq!(lookups.label("telas", 3), "Jersey 30/1");
        assert_eq!(lookups.label("telas", 4), "#4");
        assert_eq!(lookups.opt_label("telas", None), "");
        assert!(lookups.options("proveedores").is_empty());
    }
}
