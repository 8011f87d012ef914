use contracts::domain::a009_producto::aggregate::{ProductoFilters, Productos};
use contracts::domain::a014_venta::aggregate::{VentaFilters, Ventas};
use contracts::reports::ventas::{reporte_ventas, ReporteVentas, VentasPorDia};
use contracts::reports::{barras, RangoFechas, REPORTE_VENTAS};
use contracts::shared::error::ApiError;
use contracts::shared::form::FormEnum;
use contracts::shared::resource::CachePolicy;
use leptos::prelude::*;

use crate::shared::api::CrudService;
use crate::shared::date_utils::format_date;
use crate::shared::export::{csv_filename, export_to_excel, ExcelExportable};
use crate::shared::hooks::use_stats;
use crate::shared::list::alert;
use crate::shared::number_format::{format_money, format_number_int};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_REPORT};

use super::{mes_actual, BarrasTabla, Kpi, RangoSelector, ReportHeader, ReportState};

const TOP_PRODUCTOS: usize = 10;

impl ExcelExportable for VentasPorDia {
    fn headers() -> Vec<&'static str> {
        vec!["Fecha", "Ventas", "Total"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_date(self.fecha),
            self.ventas.to_string(),
            format!("{:.2}", self.total),
        ]
    }
}

async fn cargar(rango: RangoFechas) -> Result<ReporteVentas, ApiError> {
    let filtros = VentaFilters {
        fecha_desde: rango.desde,
        fecha_hasta: rango.hasta,
        ..Default::default()
    };
    let ventas = CrudService::<Ventas>::list_all(&filtros).await?;
    let productos = CrudService::<Productos>::list_all(&ProductoFilters::default()).await?;
    Ok(reporte_ventas(&ventas, &productos, rango, TOP_PRODUCTOS))
}

#[component]
pub fn ReporteVentasPage() -> impl IntoView {
    let rango = RwSignal::new(mes_actual());
    let stats = use_stats(
        REPORTE_VENTAS,
        CachePolicy::TRANSACTIONAL,
        rango.into(),
        RangoFechas::cache_name,
        cargar,
    );
    let reporte = move || stats.data.get().unwrap_or_default();

    let export = move |_| {
        let dias = stats.data.with_untracked(|d| d.as_ref().map(|r| r.por_dia.clone()).unwrap_or_default());
        let nombre = csv_filename(&format!("ventas {}", rango.get_untracked().cache_name()));
        if let Err(e) = export_to_excel(&dias, &nombre) {
            alert(&e);
        }
    };

    view! {
        <PageFrame page_id="reporte_ventas" category=PAGE_CAT_REPORT>
            <ReportHeader
                title="Reporte de ventas"
                on_export=export
                on_refresh=move |_| stats.refetch()
            >
                <RangoSelector rango=rango />
            </ReportHeader>

            <ReportState loading=stats.is_loading error=stats.error />

            <div class="kpi-grid">
                <Kpi label="Total vendido" value=Signal::derive(move || format_money(reporte().total)) />
                <Kpi label="Ventas" value=Signal::derive(move || reporte().cantidad_ventas.to_string()) />
                <Kpi label="Ticket promedio" value=Signal::derive(move || format_money(reporte().ticket_promedio)) />
                <Kpi label="Unidades" value=Signal::derive(move || format_number_int(reporte().unidades as f64)) />
                <Kpi label="Anuladas" value=Signal::derive(move || reporte().anuladas.to_string()) />
            </div>

            <BarrasTabla
                title="Ventas por día"
                barras=Signal::derive(move || {
                    barras(reporte().por_dia.into_iter().map(|d| (format_date(d.fecha), d.total)))
                })
                formato=format_money
            />
            <BarrasTabla
                title="Por método de pago"
                barras=Signal::derive(move || {
                    barras(reporte().por_metodo.into_iter().map(|m| (m.metodo.label().to_string(), m.total)))
                })
                formato=format_money
            />
            <BarrasTabla
                title="Productos más vendidos (unidades)"
                barras=Signal::derive(move || {
                    barras(reporte().top_productos.into_iter().map(|p| (p.nombre, p.unidades as f64)))
                })
                formato=format_number_int
            />
        </PageFrame>
    }
}
