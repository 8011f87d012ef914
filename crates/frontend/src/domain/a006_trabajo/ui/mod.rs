use contracts::domain::a005_costurero::aggregate::Costureros;
use contracts::domain::a004_parametros_tela::aggregate::ParametrosTelas;
use contracts::domain::a006_trabajo::aggregate::{
    EstadoTrabajo, Trabajo, Trabajos, UpdateTrabajoDto,
};
use contracts::shared::form::FormEnum;
use contracts::shared::resource::Resource;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::hooks::CrudHandle;
use crate::shared::list::{alert, crud_list_page, CellValue, Column, EntityUi, Tone};

pub fn estado_tone(estado: EstadoTrabajo) -> Tone {
    match estado {
        EstadoTrabajo::Pendiente => Tone::Warning,
        EstadoTrabajo::EnProceso => Tone::Informative,
        EstadoTrabajo::Completado => Tone::Success,
        EstadoTrabajo::Cancelado => Tone::Danger,
    }
}

/// Button caption for moving a job to `estado`.
fn accion(estado: EstadoTrabajo) -> &'static str {
    match estado {
        EstadoTrabajo::EnProceso => "Iniciar",
        EstadoTrabajo::Completado => "Completar",
        EstadoTrabajo::Cancelado => "Cancelar",
        EstadoTrabajo::Pendiente => "Reabrir",
    }
}

impl EntityUi for Trabajos {
    const PAGE_ID: &'static str = "a006_trabajo--list";

    fn columns() -> Vec<Column<Trabajo>> {
        vec![
            Column::new("codigoTrabajo", "Código", |t, _| t.codigo_trabajo.as_str().into()),
            Column::new("costurero", "Costurero", |t, l| {
                l.label(Costureros::KEY, t.costurero_id).into()
            }),
            Column::new("modelo", "Modelo", |t, l| {
                l.label(ParametrosTelas::KEY, t.parametros_tela_id).into()
            }),
            Column::new("cantidad", "Cantidad", |t, _| CellValue::Int(t.cantidad)),
            Column::new("estado", "Estado", |t, _| {
                CellValue::Badge(t.estado.label().to_string(), estado_tone(t.estado))
            }),
            Column::new("fechaInicio", "Inicio", |t, _| CellValue::Date(Some(t.fecha_inicio))),
            Column::new("fechaEntregaEstimada", "Entrega", |t, _| {
                CellValue::Date(t.fecha_entrega_estimada)
            }),
        ]
    }

    fn row_actions(trabajo: &Trabajo, crud: CrudHandle<Self>) -> Option<AnyView> {
        let siguientes = trabajo.estado.siguientes();
        if siguientes.is_empty() {
            return None;
        }
        let id = trabajo.id;
        Some(
            siguientes
                .iter()
                .map(|&next| {
                    let advance = move |_| {
                        spawn_local(async move {
                            if let Err(e) = crud.update(id, UpdateTrabajoDto::estado(next)).await {
                                alert(&format!("No se pudo cambiar el estado: {}", e));
                            }
                        });
                    };
                    view! {
                        <button
                            class="button button--small"
                            class:button--danger={next == EstadoTrabajo::Cancelado}
                            title=next.label()
                            disabled=move || crud.is_updating.get()
                            on:click=advance
                        >
                            {accion(next)}
                        </button>
                    }
                })
                .collect_view()
                .into_any(),
        )
    }
}

#[component]
pub fn TrabajoList() -> impl IntoView {
    crud_list_page::<Trabajos>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_transition_has_a_caption() {
        for estado in [EstadoTrabajo::Pendiente, EstadoTrabajo::EnProceso] {
            for next in estado.siguientes() {
                assert_ne!(accion(*next), "Reabrir");
            }
        }
    }
}
