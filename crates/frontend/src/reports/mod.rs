//! Report pages. Aggregation lives in `contracts::reports`; these views load
//! the source lists, cache the result and render it as tables with bars.

pub mod inventario;
pub mod produccion;
pub mod ventas;

use chrono::Local;
use contracts::reports::{Barra, RangoFechas};
use contracts::shared::error::ApiError;
use contracts::shared::form::parse_date;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::to_input_value;
use crate::shared::icons::icon;

/// Current calendar month.
pub fn mes_actual() -> RangoFechas {
    RangoFechas::mes_de(Local::now().date_naive()).unwrap_or_default()
}

/// Blank or malformed input clears that end of the range.
fn set_extremo(rango: RwSignal<RangoFechas>, raw: &str, desde: bool) {
    let fecha = parse_date(raw).ok().flatten();
    rango.update(|r| {
        if desde {
            r.desde = fecha;
        } else {
            r.hasta = fecha;
        }
    });
}

#[component]
pub fn RangoSelector(rango: RwSignal<RangoFechas>) -> impl IntoView {
    view! {
        <div class="report-filter">
            <label class="form-group__label">"Desde"</label>
            <input
                type="date"
                class="form-group__input"
                prop:value=move || to_input_value(rango.get().desde)
                on:change=move |ev| set_extremo(rango, &event_target_value(&ev), true)
            />
            <label class="form-group__label">"Hasta"</label>
            <input
                type="date"
                class="form-group__input"
                prop:value=move || to_input_value(rango.get().hasta)
                on:change=move |ev| set_extremo(rango, &event_target_value(&ev), false)
            />
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| rango.set(mes_actual())>
                "Mes actual"
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| rango.set(RangoFechas::default())>
                "Todo"
            </Button>
            {move || (!rango.get().es_valido()).then(|| view! {
                <div class="warning-box">
                    <span class="warning-box__text">"La fecha inicial es posterior a la final"</span>
                </div>
            })}
        </div>
    }
}

#[component]
pub fn ReportHeader(
    title: &'static str,
    #[prop(into)] on_export: Callback<()>,
    #[prop(into)] on_refresh: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="header">
            <div class="header__content">
                <h1 class="header__title">{title}</h1>
            </div>
            <div class="header__actions">
                {children()}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_refresh.run(())>
                    {icon("refresh")}
                    "Actualizar"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_export.run(())>
                    {icon("download")}
                    "Excel"
                </Button>
            </div>
        </div>
    }
}

/// Loading / error banner for a report.
#[component]
pub fn ReportState(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
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
        } else if loading.get() {
            view! {
                <div class="list-state">
                    <Spinner />
                    <span>"Calculando..."</span>
                </div>
            }
            .into_any()
        } else {
            ().into_any()
        }
    }
}

#[component]
pub fn Kpi(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="kpi">
            <span class="kpi__label">{label}</span>
            <span class="kpi__value">{value}</span>
        </div>
    }
}

/// One row per bar; the bar width is the share of the largest value.
#[component]
pub fn BarrasTabla(
    title: &'static str,
    #[prop(into)] barras: Signal<Vec<Barra>>,
    formato: fn(f64) -> String,
) -> impl IntoView {
    view! {
        <section class="report-section">
            <h2 class="report-section__title">{title}</h2>
            {move || {
                let barras = barras.get();
                if barras.is_empty() {
                    return view! { <div class="list-state list-state--empty">"Sin datos"</div> }.into_any();
                }
                view! {
                    <table class="table__data">
                        <tbody>
                            {barras.into_iter().map(|b| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{b.etiqueta}</td>
                                    <td class="table__cell table__cell--bar">
                                        <div class="bar" style=format!("width: {:.1}%", b.porcentaje)></div>
                                    </td>
                                    <td class="table__cell table__cell--number">{formato(b.valor)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}
