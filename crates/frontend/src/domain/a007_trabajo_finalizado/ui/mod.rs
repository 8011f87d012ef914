use contracts::domain::a006_trabajo::aggregate::Trabajos;
use contracts::domain::a007_trabajo_finalizado::aggregate::{
    Calidad, TrabajoFinalizado, TrabajosFinalizados,
};
use contracts::shared::form::FormEnum;
use contracts::shared::resource::Resource;
use leptos::prelude::*;

use crate::shared::list::{crud_list_page, CellValue, Column, EntityUi, Tone};

/// Above this share of defects a closed job is flagged.
const TASA_FALLAS_ALERTA: f64 = 5.0;

fn calidad_tone(calidad: Calidad) -> Tone {
    match calidad {
        Calidad::Excelente => Tone::Success,
        Calidad::Buena => Tone::Informative,
        Calidad::Regular => Tone::Warning,
        Calidad::Deficiente => Tone::Danger,
    }
}

impl EntityUi for TrabajosFinalizados {
    const PAGE_ID: &'static str = "a007_trabajo_finalizado--list";

    fn columns() -> Vec<Column<TrabajoFinalizado>> {
        vec![
            Column::new("trabajo", "Trabajo", |f, l| l.label(Trabajos::KEY, f.trabajo_id).into()),
            Column::new("fechaFinalizacion", "Finalizado", |f, _| {
                CellValue::Date(Some(f.fecha_finalizacion))
            }),
            Column::new("cantidadProducida", "Producidas", |f, _| {
                CellValue::Int(f.cantidad_producida)
            }),
            Column::new("cantidadFallas", "Fallas", |f, _| CellValue::Int(f.cantidad_fallas)),
            Column::new("tasaFallas", "% fallas", |f, _| {
                let tasa = f.tasa_fallas();
                let tone = if tasa > TASA_FALLAS_ALERTA { Tone::Danger } else { Tone::Subtle };
                CellValue::Badge(crate::shared::number_format::format_percent(tasa), tone)
            }),
            Column::new("calidad", "Calidad", |f, _| {
                CellValue::Badge(f.calidad.label().to_string(), calidad_tone(f.calidad))
            }),
            Column::new("costoTotal", "Costo", |f, _| match f.costo_total {
                Some(costo) => CellValue::Money(costo),
                None => CellValue::Text(String::new()),
            }),
        ]
    }
}

#[component]
pub fn TrabajoFinalizadoList() -> impl IntoView {
    crud_list_page::<TrabajosFinalizados>()
}
