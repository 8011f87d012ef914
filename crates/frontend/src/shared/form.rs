//! Generic form scaffold rendered from an entity's field schema.

use contracts::shared::error::ApiError;
use contracts::shared::form::{parse_bool, FieldErrors, FieldKind, FieldSpec, FormValues, SelectOption};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::hooks::CrudHandle;
use super::list::EntityUi;
use super::lookups::Lookups;

/// Reactive state shared by the fields of one open form.
#[derive(Clone, Copy)]
pub struct FormCtx {
    pub values: RwSignal<FormValues>,
    pub errors: RwSignal<FieldErrors>,
    pub lookups: Signal<Lookups>,
}

impl FormCtx {
    pub fn new(initial: FormValues, lookups: Signal<Lookups>) -> Self {
        Self {
            values: RwSignal::new(initial),
            errors: RwSignal::new(FieldErrors::new()),
            lookups,
        }
    }

    pub fn get(&self, name: &str) -> String {
        self.values.with(|v| v.get(name).to_string())
    }

    pub fn get_untracked(&self, name: &str) -> String {
        self.values.with_untracked(|v| v.get(name).to_string())
    }

    /// Editing a field clears its error.
    pub fn set(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        self.values.update(|v| v.set(name, value));
        if self.errors.with_untracked(|e| e.contains(name)) {
            self.errors.update(|e| e.remove(name));
        }
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.errors.with(|e| e.get(name).map(str::to_string))
    }

    /// Errors the server reports against fields of `schema` land on those
    /// fields; anything else is returned as a message for the form banner.
    pub fn absorb(&self, error: ApiError, schema: &[FieldSpec]) -> Option<String> {
        let names: Vec<&str> = schema.iter().map(|f| f.name).collect();
        match error.field_errors_for(&names) {
            Some(errors) => {
                self.errors.set(errors);
                None
            }
            None => Some(error.to_string()),
        }
    }
}

fn input_type(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Password => "password",
        FieldKind::Integer | FieldKind::Decimal => "number",
        FieldKind::Date => "date",
        _ => "text",
    }
}

/// Inline error under a field.
pub fn field_error(form: FormCtx, name: &'static str) -> impl IntoView {
    move || {
        form.error(name)
            .map(|message| view! { <div class="form-group__error">{message}</div> })
    }
}

/// `<select>` bound to `name`; `placeholder` adds an empty first option.
pub fn select_input(
    form: FormCtx,
    name: &'static str,
    options: Signal<Vec<SelectOption>>,
    placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <select
            class="form-group__input"
            prop:value=move || form.get(name)
            on:change=move |ev| form.set(name, event_target_value(&ev))
        >
            {placeholder.map(|text| view! { <option value="">{text}</option> })}
            {move || {
                let current = form.get(name);
                options.get().into_iter().map(|o| {
                    let selected = o.value == current;
                    view! { <option value=o.value selected=selected>{o.label}</option> }
                }).collect_view()
            }}
        </select>
    }
}

/// Default input for a schema field.
pub fn field_input(field: &FieldSpec, form: FormCtx) -> AnyView {
    let name = field.name;
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };
    let placeholder = field.placeholder;

    let control = match &field.kind {
        FieldKind::Bool => view! {
            <label class="form-group__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || parse_bool(&form.get(name))
                    on:change=move |ev| form.set(name, event_target_checked(&ev).to_string())
                />
                {field.label}
            </label>
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                class="form-group__input"
                rows="3"
                placeholder=placeholder
                prop:value=move || form.get(name)
                on:input=move |ev| form.set(name, event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(options) => {
            let options = Signal::stored(options.clone());
            let empty = (!field.required).then_some("—");
            select_input(form, name, options, empty).into_any()
        }
        FieldKind::Reference(resource) => {
            let resource = *resource;
            let options = Signal::derive(move || form.lookups.with(|l| l.options(resource).to_vec()));
            select_input(form, name, options, Some("Seleccione...")).into_any()
        }
        kind => {
            let step = match kind {
                FieldKind::Decimal => Some("any"),
                FieldKind::Integer => Some("1"),
                _ => None,
            };
            view! {
                <input
                    type=input_type(kind)
                    class="form-group__input"
                    step=step
                    placeholder=placeholder
                    prop:value=move || form.get(name)
                    on:input=move |ev| form.set(name, event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    let show_label = field.kind != FieldKind::Bool;
    view! {
        <div class="form-group" class:form-group--invalid=move || form.error(name).is_some()>
            {show_label.then(|| view! { <label class="form-group__label">{label}</label> })}
            {control}
            {field_error(form, name)}
        </div>
    }
    .into_any()
}

/// Create/edit form for `R`. Calls `on_done` once the server accepted it.
pub fn entity_form_view<R: EntityUi>(
    crud: CrudHandle<R>,
    lookups: Signal<Lookups>,
    entity: Option<R::Entity>,
    on_done: Callback<()>,
) -> impl IntoView {
    let editing_id = entity.as_ref().map(R::id);
    let initial = entity.as_ref().map(R::from_entity).unwrap_or_else(R::blank);
    let form = FormCtx::new(initial, lookups);
    let banner = RwSignal::new(None::<String>);
    let schema = StoredValue::new(R::schema());

    let saving = Signal::derive(move || crud.is_creating.get() || crud.is_updating.get());

    let submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        banner.set(None);
        let values = form.values.get_untracked();

        match editing_id {
            None => match R::to_create(&values) {
                Err(errors) => form.errors.set(errors),
                Ok(dto) => {
                    form.errors.set(FieldErrors::new());
                    spawn_local(async move {
                        match crud.create(dto).await {
                            Ok(_) => on_done.run(()),
                            Err(e) => {
                                banner.set(schema.with_value(|fields| form.absorb(e, fields)))
                            }
                        }
                    });
                }
            },
            Some(id) => match R::to_update(&values) {
                Err(errors) => form.errors.set(errors),
                Ok(dto) => {
                    form.errors.set(FieldErrors::new());
                    spawn_local(async move {
                        match crud.update(id, dto).await {
                            Ok(_) => on_done.run(()),
                            Err(e) => {
                                banner.set(schema.with_value(|fields| form.absorb(e, fields)))
                            }
                        }
                    });
                }
            },
        }
    };

    view! {
        <div class="details-form">
            {move || banner.get().map(|message| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{message}</span>
                </div>
            })}
            {move || (!form.errors.with(|e| e.is_empty())).then(|| view! {
                <div class="warning-box">
                    <span class="warning-box__text">"Revise los campos marcados"</span>
                </div>
            })}

            <div class="details-container">
                {schema.with_value(|fields| fields.iter().map(|field| {
                    R::field_editor(field, form).unwrap_or_else(|| field_input(field, form))
                }).collect_view())}
            </div>

            {R::extra_editor(form)}

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_done.run(())>
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=saving
                    on_click=submit
                >
                    {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_kinds_use_number_inputs() {
        assert_eq!(input_type(&FieldKind::Integer), "number");
        assert_eq!(input_type(&FieldKind::Decimal), "number");
        assert_eq!(input_type(&FieldKind::Date), "date");
        assert_eq!(input_type(&FieldKind::Password), "password");
        assert_eq!(input_type(&FieldKind::Text), "text");
    }
}
