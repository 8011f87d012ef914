use contracts::domain::a003_inventario_tela::aggregate::{InventarioTelaFilters, InventarioTelas};
use contracts::domain::a009_producto::aggregate::{ProductoFilters, Productos};
use contracts::domain::a011_sucursal::aggregate::{SucursalFilters, Sucursales};
use contracts::domain::a012_inventario_tienda::aggregate::{
    InventarioTiendaFilters, InventariosTienda,
};
use contracts::domain::a013_inventario_sucursal::aggregate::{
    InventarioSucursalFilters, InventariosSucursal,
};
use contracts::reports::inventario::{
    reporte_inventario, AlertaStock, FuentesInventario, ReporteInventario,
};
use contracts::reports::{barras, REPORTE_INVENTARIO};
use contracts::shared::error::ApiError;
use contracts::shared::resource::CachePolicy;
use leptos::prelude::*;

use crate::shared::api::CrudService;
use crate::shared::export::{csv_filename, export_to_excel, ExcelExportable};
use crate::shared::hooks::use_stats;
use crate::shared::list::alert;
use crate::shared::number_format::{format_kg, format_money, format_number_int};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_REPORT};

use super::{BarrasTabla, Kpi, ReportHeader, ReportState};

impl ExcelExportable for AlertaStock {
    fn headers() -> Vec<&'static str> {
        vec!["Ubicación", "Producto", "Stock", "Mínimo", "Faltante"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.ubicacion_nombre.clone(),
            self.producto_nombre.clone(),
            self.stock.to_string(),
            self.stock_minimo.to_string(),
            self.faltante.to_string(),
        ]
    }
}

async fn cargar(_: ()) -> Result<ReporteInventario, ApiError> {
    let tienda =
        CrudService::<InventariosTienda>::list_all(&InventarioTiendaFilters::default()).await?;
    let sucursal =
        CrudService::<InventariosSucursal>::list_all(&InventarioSucursalFilters::default()).await?;
    let telas = CrudService::<InventarioTelas>::list_all(&InventarioTelaFilters::default()).await?;
    let productos = CrudService::<Productos>::list_all(&ProductoFilters::default()).await?;
    let sucursales = CrudService::<Sucursales>::list_all(&SucursalFilters::default()).await?;
    Ok(reporte_inventario(FuentesInventario {
        tienda: &tienda,
        sucursal: &sucursal,
        telas: &telas,
        productos: &productos,
        sucursales: &sucursales,
    }))
}

#[component]
pub fn ReporteInventarioPage() -> impl IntoView {
    let stats = use_stats(
        REPORTE_INVENTARIO,
        CachePolicy::OPERATIONAL,
        Signal::stored(()),
        |_| "actual".to_string(),
        cargar,
    );
    let reporte = move || stats.data.get().unwrap_or_default();

    let export = move |_| {
        let alertas = stats
            .data
            .with_untracked(|d| d.as_ref().map(|r| r.bajo_minimo.clone()).unwrap_or_default());
        if let Err(e) = export_to_excel(&alertas, &csv_filename("stock bajo minimo")) {
            alert(&e);
        }
    };

    view! {
        <PageFrame page_id="reporte_inventario" category=PAGE_CAT_REPORT>
            <ReportHeader
                title="Reporte de inventario"
                on_export=export
                on_refresh=move |_| stats.refetch()
            >
                ""
            </ReportHeader>

            <ReportState loading=stats.is_loading error=stats.error />

            <div class="kpi-grid">
                <Kpi label="Productos bajo mínimo" value=Signal::derive(move || reporte().bajo_minimo.len().to_string()) />
                <Kpi label="Valor de telas" value=Signal::derive(move || format_money(reporte().valor_telas)) />
                <Kpi label="Kilos de tela" value=Signal::derive(move || format_kg(reporte().kilos_telas)) />
                <Kpi label="Rollos" value=Signal::derive(move || format_number_int(reporte().rollos as f64)) />
            </div>

            <section class="report-section">
                <h2 class="report-section__title">"Stock bajo el mínimo"</h2>
                {move || {
                    let alertas = reporte().bajo_minimo;
                    if alertas.is_empty() {
                        return view! {
                            <div class="list-state list-state--empty">"Todo el stock está sobre el mínimo"</div>
                        }
                        .into_any();
                    }
                    view! {
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    {AlertaStock::headers().into_iter().map(|h| view! {
                                        <th class="table__header-cell">{h}</th>
                                    }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {alertas.into_iter().map(|a| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{a.ubicacion_nombre}</td>
                                        <td class="table__cell">{a.producto_nombre}</td>
                                        <td class="table__cell table__cell--number">{a.stock}</td>
                                        <td class="table__cell table__cell--number">{a.stock_minimo}</td>
                                        <td class="table__cell table__cell--number table__cell--danger">{a.faltante}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}
            </section>

            <BarrasTabla
                title="Valor de tela por tipo"
                barras=Signal::derive(move || {
                    barras(reporte().telas.into_iter().map(|t| (t.tipo_tela, t.valor)))
                })
                formato=format_money
            />
        </PageFrame>
    }
}
