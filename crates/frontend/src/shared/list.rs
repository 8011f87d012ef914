//! List pages: search, sort, pagination, export and the generic CRUD page.

use std::cmp::Ordering;

use chrono::NaiveDate;
use contracts::shared::config::{LIST_PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use contracts::shared::error::ApiError;
use contracts::shared::form::{FieldKind, FieldSpec};
use contracts::shared::page::paginate;
use contracts::shared::resource::Resource;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::date_utils::format_opt_date;
use super::export::{csv_filename, export_table};
use super::form::{entity_form_view, FormCtx};
use super::hooks::{use_crud, use_debounced, CrudHandle};
use super::icons::icon;
use super::lookups::{use_lookups, Lookups};
use super::modal::Modal;
use super::number_format::{format_money, format_number_int, format_number_with_decimals};
use super::page_frame::{PageFrame, PAGE_CAT_LIST};

// ============================================================================
// Search and sort
// ============================================================================

pub trait Searchable {
    /// Case-insensitive match against every displayed field.
    fn matches_filter(&self, filter: &str) -> bool;

    fn get_field_value(&self, field: &str) -> Option<String>;
}

pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// A single non-blank character is enough to filter.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Search box bound to `value`; consumers debounce it with `use_debounced`.
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Buscar...".to_string());

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || (!value.get().is_empty()).then(|| view! {
                <button
                    class="search-input__clear"
                    title="Limpiar"
                    on:click=move |_| value.set(String::new())
                >
                    {icon("x")}
                </button>
            })}
        </div>
    }
}

#[component]
pub fn PaginationControls(
    /// Zero-based page.
    page: RwSignal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
) -> impl IntoView {
    let last = move || total_pages.get().saturating_sub(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="Primera página"
                disabled=move || page.get() == 0
                on:click=move |_| page.set(0)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Página anterior"
                disabled=move || page.get() == 0
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!(
                    "{} / {} ({})",
                    page.get() + 1,
                    total_pages.get().max(1),
                    total_count.get()
                )}
            </span>
            <button
                class="pagination-btn"
                title="Página siguiente"
                disabled=move || page.get() >= last()
                on:click=move |_| page.update(|p| *p = (*p + 1).min(last()))
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Última página"
                disabled=move || page.get() >= last()
                on:click=move |_| page.set(last())
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

// ============================================================================
// Cells and rows
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Informative,
    Subtle,
}

impl Tone {
    pub fn color(self) -> BadgeColor {
        match self {
            Tone::Success => BadgeColor::Success,
            Tone::Warning => BadgeColor::Warning,
            Tone::Danger => BadgeColor::Danger,
            Tone::Informative => BadgeColor::Informative,
            Tone::Subtle => BadgeColor::Subtle,
        }
    }
}

/// Typed table cell: the type drives formatting, alignment and sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Decimal(f64, u8),
    Money(f64),
    Date(Option<NaiveDate>),
    Bool(bool),
    Badge(String, Tone),
}

impl CellValue {
    pub fn text(&self) -> String {
        match self {
            CellValue::Text(s) | CellValue::Badge(s, _) => s.clone(),
            CellValue::Int(n) => format_number_int(*n as f64),
            CellValue::Decimal(v, decimals) => format_number_with_decimals(*v, *decimals),
            CellValue::Money(v) => format_money(*v),
            CellValue::Date(d) => format_opt_date(*d),
            CellValue::Bool(true) => "Sí".to_string(),
            CellValue::Bool(false) => "No".to_string(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CellValue::Int(_) | CellValue::Decimal(..) | CellValue::Money(_)
        )
    }

    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (
                CellValue::Decimal(a, _) | CellValue::Money(a),
                CellValue::Decimal(b, _) | CellValue::Money(b),
            ) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            _ => self.text().to_lowercase().cmp(&other.text().to_lowercase()),
        }
    }

    pub fn view(&self) -> AnyView {
        match self {
            CellValue::Badge(label, tone) => {
                let label = label.clone();
                view! {
                    <Badge appearance=BadgeAppearance::Tint color=tone.color()>{label}</Badge>
                }
                .into_any()
            }
            CellValue::Bool(active) => {
                let (label, color) = if *active {
                    ("Sí", BadgeColor::Success)
                } else {
                    ("No", BadgeColor::Subtle)
                };
                view! { <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge> }
                    .into_any()
            }
            other => other.text().into_any(),
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        CellValue::Text(value.unwrap_or_default())
    }
}

pub struct Column<E> {
    pub field: &'static str,
    pub title: &'static str,
    pub value: fn(&E, &Lookups) -> CellValue,
}

impl<E> Column<E> {
    pub fn new(field: &'static str, title: &'static str, value: fn(&E, &Lookups) -> CellValue) -> Self {
        Self { field, title, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListRow<E> {
    pub id: i64,
    pub entity: E,
    pub cells: Vec<(&'static str, CellValue)>,
}

impl<E> ListRow<E> {
    fn cell(&self, field: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(f, _)| *f == field).map(|(_, v)| v)
    }

    pub fn csv_row(&self) -> Vec<String> {
        self.cells.iter().map(|(_, v)| v.text()).collect()
    }
}

impl<E> Searchable for ListRow<E> {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        self.cells
            .iter()
            .any(|(_, value)| value.text().to_lowercase().contains(&needle))
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        self.cell(field).map(CellValue::text)
    }
}

impl<E> Sortable for ListRow<E> {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match (self.cell(field), other.cell(field)) {
            (Some(a), Some(b)) => a.compare(b),
            _ => Ordering::Equal,
        }
    }
}

pub fn build_rows<R: Resource>(
    items: Vec<R::Entity>,
    columns: &[Column<R::Entity>],
    lookups: &Lookups,
) -> Vec<ListRow<R::Entity>> {
    items
        .into_iter()
        .map(|entity| ListRow {
            id: R::id(&entity),
            cells: columns
                .iter()
                .map(|c| (c.field, (c.value)(&entity, lookups)))
                .collect(),
            entity,
        })
        .collect()
}

// ============================================================================
// Browser dialogs
// ============================================================================

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

/// Ask, await the delete, then report what the server said.
pub fn confirm_and_delete<F, Fut>(element: &str, label: &str, delete: F)
where
    F: FnOnce() -> Fut + 'static,
    Fut: std::future::Future<Output = Result<(), ApiError>> + 'static,
{
    if !confirm(&format!("¿Eliminar {} \"{}\"?", element.to_lowercase(), label)) {
        return;
    }
    let label = label.to_string();
    spawn_local(async move {
        match delete().await {
            Ok(()) => alert(&format!("Registro eliminado: {}", label)),
            Err(e) => alert(&format!("No se pudo eliminar: {}", e)),
        }
    });
}

// ============================================================================
// Shared states
// ============================================================================

/// Loading / error / empty placeholder shown above or instead of a table.
#[component]
pub fn ListState(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] empty: Signal<bool>,
) -> impl IntoView {
    move || {
        if let Some(e) = error.get() {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e.to_string()}</span>
                </div>
            }
            .into_any()
        } else if loading.get() && empty.get() {
            view! {
                <div class="list-state">
                    <Spinner />
                    <span>"Cargando..."</span>
                </div>
            }
            .into_any()
        } else if empty.get() {
            view! { <div class="list-state list-state--empty">"No hay registros"</div> }.into_any()
        } else {
            ().into_any()
        }
    }
}

// ============================================================================
// Generic CRUD page
// ============================================================================

/// Everything a generic list page needs beyond the form mapping.
pub trait EntityUi: contracts::shared::form::EntityForm {
    /// Root element id of the list page.
    const PAGE_ID: &'static str;
    /// Resources whose labels the columns show.
    const LOOKUPS: &'static [&'static str] = &[];

    fn columns() -> Vec<Column<Self::Entity>>;

    fn list_params() -> Self::ListParams {
        Self::ListParams::default()
    }

    /// Replaces the default input of `field`.
    fn field_editor(_field: &FieldSpec, _form: FormCtx) -> Option<AnyView> {
        None
    }

    /// Extra section rendered below the schema fields.
    fn extra_editor(_form: FormCtx) -> Option<AnyView> {
        None
    }

    /// Buttons shown before edit/delete on each row.
    fn row_actions(_entity: &Self::Entity, _crud: CrudHandle<Self>) -> Option<AnyView>
    where
        Self: Sized,
    {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Editor<E> {
    Closed,
    Create,
    Edit(E),
}

pub fn reference_keys(schema: &[FieldSpec]) -> Vec<&'static str> {
    schema
        .iter()
        .filter_map(|f| match f.kind {
            FieldKind::Reference(resource) => Some(resource),
            _ => None,
        })
        .collect()
}

pub fn crud_list_page<R: EntityUi>() -> impl IntoView {
    let crud = use_crud::<R>(Signal::derive(R::list_params));

    let mut lookup_keys = R::LOOKUPS.to_vec();
    lookup_keys.extend(reference_keys(&R::schema()));
    let lookups = use_lookups(&lookup_keys);

    let search = RwSignal::new(String::new());
    let filter = use_debounced::<String>(search.into(), SEARCH_DEBOUNCE_MS);
    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);
    let page = RwSignal::new(0usize);
    let editor = RwSignal::new(Editor::<R::Entity>::Closed);
    let columns = StoredValue::new(R::columns());

    Effect::new(move |_| {
        filter.track();
        page.set(0);
    });

    let rows = Memo::new(move |_| {
        let items = crud.items();
        let mut rows = lookups.with(|l| columns.with_value(|cols| build_rows::<R>(items, cols, l)));
        rows = filter_list(rows, &filter.get());
        let field = sort_field.get();
        if !field.is_empty() {
            sort_list(&mut rows, &field, sort_ascending.get());
        }
        rows
    });
    let visible = Memo::new(move |_| rows.with(|r| paginate(r, page.get(), LIST_PAGE_SIZE)));

    let toggle_sort = move |field: &'static str| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|v| *v = !*v);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    };

    let export = move |_| {
        let headers: Vec<&str> = columns.with_value(|cols| cols.iter().map(|c| c.title).collect());
        let data: Vec<Vec<String>> = rows.with_untracked(|r| r.iter().map(ListRow::csv_row).collect());
        if let Err(e) = export_table(&headers, &data, &csv_filename(R::LIST_NAME)) {
            alert(&e);
        }
    };

    let delete = move |entity: R::Entity| {
        let id = R::id(&entity);
        confirm_and_delete(R::ELEMENT_NAME, &R::label(&entity), move || crud.delete(id));
    };

    let close = Callback::new(move |_| editor.set(Editor::Closed));

    view! {
        <PageFrame page_id=R::PAGE_ID category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{R::LIST_NAME}</h1>
                </div>
                <div class="header__actions">
                    <SearchInput value=search />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.set(Editor::Create)>
                        {icon("plus")}
                        "Nuevo"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| crud.refetch()>
                        {icon("refresh")}
                        "Actualizar"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=export>
                        {icon("download")}
                        "Excel"
                    </Button>
                </div>
            </div>

            <ListState
                loading=crud.is_loading
                error=crud.error
                empty=Signal::derive(move || rows.with(|r| r.is_empty()))
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns.with_value(|cols| cols.iter().map(|c| {
                                let field = c.field;
                                let title = c.title;
                                view! {
                                    <th
                                        class="table__header-cell table__header-cell--sortable"
                                        on:click=move |_| toggle_sort(field)
                                    >
                                        {title}
                                        {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                                    </th>
                                }
                            }).collect_view())}
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().0.into_iter().map(|row| {
                            let extra = R::row_actions(&row.entity, crud);
                            let for_edit = row.entity.clone();
                            let for_delete = row.entity.clone();
                            view! {
                                <tr class="table__row">
                                    {row.cells.iter().map(|(_, value)| view! {
                                        <td class="table__cell" class:table__cell--number=value.is_numeric()>
                                            {value.view()}
                                        </td>
                                    }).collect_view()}
                                    <td class="table__cell table__cell--actions">
                                        {extra}
                                        <button
                                            class="button button--icon"
                                            title="Editar"
                                            on:click=move |_| editor.set(Editor::Edit(for_edit.clone()))
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--icon button--danger"
                                            title="Eliminar"
                                            disabled=move || crud.is_deleting.get()
                                            on:click=move |_| delete(for_delete.clone())
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                page=page
                total_pages=Signal::derive(move || visible.with(|v| v.1))
                total_count=Signal::derive(move || rows.with(|r| r.len()))
            />

            {move || match editor.get() {
                Editor::Closed => ().into_any(),
                Editor::Create => view! {
                    <Modal title=format!("Nuevo: {}", R::ELEMENT_NAME) on_close=close>
                        {entity_form_view::<R>(crud, lookups, None, close)}
                    </Modal>
                }.into_any(),
                Editor::Edit(entity) => view! {
                    <Modal title=format!("Editar: {}", R::label(&entity)) on_close=close>
                        {entity_form_view::<R>(crud, lookups, Some(entity), close)}
                    </Modal>
                }.into_any(),
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, nombre: &str, precio: f64) -> ListRow<i64> {
        ListRow {
            id,
            entity: id,
            cells: vec![
                ("nombre", CellValue::from(nombre)),
                ("precio", CellValue::Money(precio)),
            ],
        }
    }

    #[test]
    fn one_character_is_enough_to_filter() {
        let rows = vec![row(1, "Polo básico", 25.0), row(2, "Buzo", 80.0)];
        let found = filter_list(rows.clone(), "z");
        assert_eq!(found.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(filter_list(rows, "  ").len(), 2);
    }

    #[test]
    fn filter_is_case_insensitive_and_covers_formatted_values() {
        let rows = vec![row(1, "Polo básico", 1250.0), row(2, "Buzo", 80.0)];
        assert_eq!(filter_list(rows.clone(), "POLO").len(), 1);
        assert_eq!(filter_list(rows, "1 250").len(), 1);
    }

    #[test]
    fn money_columns_sort_numerically() {
        let mut rows = vec![row(1, "a", 100.0), row(2, "b", 9.5), row(3, "c", 20.0)];
        sort_list(&mut rows, "precio", true);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3, 1]);
        sort_list(&mut rows, "nombre", false);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn empty_dates_sort_first() {
        let a = CellValue::Date(None);
        let b = CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.text(), "01/01/2024");
    }

    #[test]
    fn sort_indicator() {
        assert_eq!(get_sort_indicator("precio", "precio", true), " ▲");
        assert_eq!(get_sort_indicator("precio", "precio", false), " ▼");
        assert_eq!(get_sort_indicator("nombre", "precio", true), " ⇅");
    }
}
