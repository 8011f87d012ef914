use contracts::domain::a004_parametros_tela::aggregate::{ParametrosTelaFilters, ParametrosTelas};
use contracts::domain::a005_costurero::aggregate::{CostureroFilters, Costureros};
use contracts::domain::a006_trabajo::aggregate::{TrabajoFilters, Trabajos};
use contracts::domain::a007_trabajo_finalizado::aggregate::{
    TrabajoFinalizadoFilters, TrabajosFinalizados,
};
use contracts::reports::produccion::{reporte_produccion, ProduccionCosturero, ReporteProduccion};
use contracts::reports::{barras, RangoFechas, REPORTE_PRODUCCION};
use contracts::shared::error::ApiError;
use contracts::shared::form::FormEnum;
use contracts::shared::resource::CachePolicy;
use leptos::prelude::*;

use crate::domain::a006_trabajo::ui::estado_tone;
use crate::shared::api::CrudService;
use crate::shared::export::{csv_filename, export_to_excel, ExcelExportable};
use crate::shared::hooks::use_stats;
use crate::shared::list::{alert, CellValue};
use crate::shared::number_format::{format_kg, format_number_int, format_percent};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_REPORT};

use super::{mes_actual, BarrasTabla, Kpi, RangoSelector, ReportHeader, ReportState};

impl ExcelExportable for ProduccionCosturero {
    fn headers() -> Vec<&'static str> {
        vec!["Costurero", "Trabajos finalizados", "Producidas", "Fallas", "% fallas"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.nombre.clone(),
            self.trabajos_finalizados.to_string(),
            self.producidas.to_string(),
            self.fallas.to_string(),
            format!("{:.2}", self.tasa_fallas),
        ]
    }
}

async fn cargar(rango: RangoFechas) -> Result<ReporteProduccion, ApiError> {
    let trabajos = CrudService::<Trabajos>::list_all(&TrabajoFilters::default()).await?;
    let finalizados =
        CrudService::<TrabajosFinalizados>::list_all(&TrabajoFinalizadoFilters::default()).await?;
    let costureros = CrudService::<Costureros>::list_all(&CostureroFilters::default()).await?;
    let parametros =
        CrudService::<ParametrosTelas>::list_all(&ParametrosTelaFilters::default()).await?;
    Ok(reporte_produccion(
        &trabajos,
        &finalizados,
        &costureros,
        &parametros,
        rango,
    ))
}

#[component]
pub fn ReporteProduccionPage() -> impl IntoView {
    let rango = RwSignal::new(mes_actual());
    let stats = use_stats(
        REPORTE_PRODUCCION,
        CachePolicy::OPERATIONAL,
        rango.into(),
        RangoFechas::cache_name,
        cargar,
    );
    let reporte = move || stats.data.get().unwrap_or_default();

    let export = move |_| {
        let filas = stats
            .data
            .with_untracked(|d| d.as_ref().map(|r| r.por_costurero.clone()).unwrap_or_default());
        let nombre = csv_filename(&format!("produccion {}", rango.get_untracked().cache_name()));
        if let Err(e) = export_to_excel(&filas, &nombre) {
            alert(&e);
        }
    };

    view! {
        <PageFrame page_id="reporte_produccion" category=PAGE_CAT_REPORT>
            <ReportHeader
                title="Reporte de producción"
                on_export=export
                on_refresh=move |_| stats.refetch()
            >
                <RangoSelector rango=rango />
            </ReportHeader>

            <ReportState loading=stats.is_loading error=stats.error />

            <div class="kpi-grid">
                <Kpi label="Prendas producidas" value=Signal::derive(move || format_number_int(reporte().total_producidas as f64)) />
                <Kpi label="Fallas" value=Signal::derive(move || format_number_int(reporte().total_fallas as f64)) />
                <Kpi label="Tasa de fallas" value=Signal::derive(move || format_percent(reporte().tasa_fallas)) />
                <Kpi label="Tela comprometida" value=Signal::derive(move || format_kg(reporte().tela_comprometida_kg)) />
            </div>

            <section class="report-section">
                <h2 class="report-section__title">"Trabajos por estado"</h2>
                <div class="kpi-grid">
                    {move || reporte().por_estado.into_iter().map(|fila| view! {
                        <div class="kpi">
                            {CellValue::Badge(fila.estado.label().to_string(), estado_tone(fila.estado)).view()}
                            <span class="kpi__value">{fila.trabajos}</span>
                            <span class="kpi__label">{format!("{} unidades", fila.unidades)}</span>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <BarrasTabla
                title="Prendas producidas por costurero"
                barras=Signal::derive(move || {
                    barras(reporte().por_costurero.into_iter().map(|c| (c.nombre, c.producidas as f64)))
                })
                formato=format_number_int
            />

            <section class="report-section">
                <h2 class="report-section__title">"Calidad por costurero"</h2>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {ProduccionCosturero::headers().into_iter().map(|h| view! {
                                <th class="table__header-cell">{h}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || reporte().por_costurero.into_iter().map(|c| view! {
                            <tr class="table__row">
                                <td class="table__cell">{c.nombre}</td>
                                <td class="table__cell table__cell--number">{c.trabajos_finalizados}</td>
                                <td class="table__cell table__cell--number">{c.producidas}</td>
                                <td class="table__cell table__cell--number">{c.fallas}</td>
                                <td class="table__cell table__cell--number">{format_percent(c.tasa_fallas)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </section>
        </PageFrame>
    }
}
