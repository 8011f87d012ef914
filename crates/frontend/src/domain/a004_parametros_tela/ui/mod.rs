mod consumo_editor;

use contracts::domain::a004_parametros_tela::aggregate::{
    EstadoPrenda, ParametrosTela, ParametrosTelas,
};
use contracts::domain::a004_parametros_tela::consumo::parse_consumo;
use contracts::shared::form::FormEnum;
use leptos::prelude::*;

use crate::shared::form::FormCtx;
use crate::shared::list::{crud_list_page, CellValue, Column, EntityUi, Tone};

use consumo_editor::ConsumoEditor;

fn estado_cell(estado: EstadoPrenda) -> CellValue {
    let tone = match estado {
        EstadoPrenda::Nuevo => Tone::Informative,
        EstadoPrenda::EnProduccion => Tone::Success,
        EstadoPrenda::Descontinuado => Tone::Subtle,
    };
    CellValue::Badge(estado.label().to_string(), tone)
}

/// "S 0.45 · M 0.5"
fn resumen_consumo(json: &str) -> String {
    parse_consumo(json)
        .iter()
        .map(|(talla, kg)| format!("{} {}", talla, kg))
        .collect::<Vec<_>>()
        .join(" · ")
}

impl EntityUi for ParametrosTelas {
    const PAGE_ID: &'static str = "a004_parametros_tela--list";

    fn columns() -> Vec<Column<ParametrosTela>> {
        vec![
            Column::new("codigoReferencia", "Código", |p, _| {
                p.codigo_referencia.as_str().into()
            }),
            Column::new("nombreModelo", "Modelo", |p, _| p.nombre_modelo.as_str().into()),
            Column::new("tipoTelaRecomendada", "Tela", |p, _| {
                p.tipo_tela_recomendada.as_str().into()
            }),
            Column::new("estadoPrenda", "Estado", |p, _| estado_cell(p.estado_prenda)),
            Column::new("cantidadTelaNecesaria", "Kg/unidad", |p, _| {
                CellValue::Decimal(p.cantidad_tela_necesaria, 3)
            }),
            Column::new("consumo", "Consumo por talla", |p, _| {
                resumen_consumo(&p.consumo_tela_por_talla).into()
            }),
            Column::new("tiempo", "Min/unidad", |p, _| {
                CellValue::Decimal(p.tiempo_fabricacion_por_unidad, 1)
            }),
        ]
    }

    fn extra_editor(form: FormCtx) -> Option<AnyView> {
        Some(view! { <ConsumoEditor form=form /> }.into_any())
    }
}

#[component]
pub fn ParametrosTelaList() -> impl IntoView {
    crud_list_page::<ParametrosTelas>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumo_summary_lists_sizes_with_consumption() {
        assert_eq!(resumen_consumo(r#"{"M":0.5,"S":0,"L":"0.55"}"#), "L 0.55 · M 0.5");
        assert_eq!(resumen_consumo("no json"), "");
    }
}
