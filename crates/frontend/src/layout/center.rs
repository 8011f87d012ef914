use leptos::prelude::*;

use super::{use_navigation, Seccion};
use crate::domain::a001_proveedor::ui::ProveedorList;
use crate::domain::a002_tela::ui::TelaList;
use crate::domain::a003_inventario_tela::ui::InventarioTelaList;
use crate::domain::a004_parametros_tela::ui::ParametrosTelaList;
use crate::domain::a005_costurero::ui::CostureroList;
use crate::domain::a006_trabajo::ui::TrabajoList;
use crate::domain::a007_trabajo_finalizado::ui::TrabajoFinalizadoList;
use crate::domain::a008_categoria::ui::{CategoriaList, SubcategoriaList};
use crate::domain::a009_producto::ui::ProductoList;
use crate::domain::a010_tienda::ui::TiendaList;
use crate::domain::a011_sucursal::ui::SucursalList;
use crate::domain::a012_inventario_tienda::ui::InventarioTiendaList;
use crate::domain::a013_inventario_sucursal::ui::InventarioSucursalList;
use crate::domain::a014_venta::ui::VentaList;
use crate::domain::a015_carrito::ui::CarritoList;
use crate::domain::a016_config_web::ui::ConfigWebPage;
use crate::reports::inventario::ReporteInventarioPage;
use crate::reports::produccion::ReporteProduccionPage;
use crate::reports::ventas::ReporteVentasPage;
use crate::system::usuarios::ui::UsuarioList;

/// Renders the page selected in the sidebar. Switching sections unmounts
/// the previous page, which drops its debounce timers and listeners.
#[component]
pub fn Center() -> impl IntoView {
    let nav = use_navigation();

    move || match nav.active.get() {
        Seccion::Proveedores => view! { <ProveedorList /> }.into_any(),
        Seccion::Telas => view! { <TelaList /> }.into_any(),
        Seccion::InventarioTelas => view! { <InventarioTelaList /> }.into_any(),
        Seccion::ParametrosTela => view! { <ParametrosTelaList /> }.into_any(),
        Seccion::Costureros => view! { <CostureroList /> }.into_any(),
        Seccion::Trabajos => view! { <TrabajoList /> }.into_any(),
        Seccion::TrabajosFinalizados => view! { <TrabajoFinalizadoList /> }.into_any(),
        Seccion::Categorias => view! { <CategoriaList /> }.into_any(),
        Seccion::Subcategorias => view! { <SubcategoriaList /> }.into_any(),
        Seccion::Productos => view! { <ProductoList /> }.into_any(),
        Seccion::InventarioTienda => view! { <InventarioTiendaList /> }.into_any(),
        Seccion::InventarioSucursal => view! { <InventarioSucursalList /> }.into_any(),
        Seccion::Ventas => view! { <VentaList /> }.into_any(),
        Seccion::Pedidos => view! { <CarritoList /> }.into_any(),
        Seccion::ReporteVentas => view! { <ReporteVentasPage /> }.into_any(),
        Seccion::ReporteProduccion => view! { <ReporteProduccionPage /> }.into_any(),
        Seccion::ReporteInventario => view! { <ReporteInventarioPage /> }.into_any(),
        Seccion::Tiendas => view! { <TiendaList /> }.into_any(),
        Seccion::Sucursales => view! { <SucursalList /> }.into_any(),
        Seccion::ConfigWeb => view! { <ConfigWebPage /> }.into_any(),
        Seccion::Usuarios => view! { <UsuarioList /> }.into_any(),
    }
}
