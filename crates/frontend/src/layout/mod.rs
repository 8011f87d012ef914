pub mod center;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;

use center::Center;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Every page reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seccion {
    Proveedores,
    Telas,
    InventarioTelas,
    ParametrosTela,
    Costureros,
    Trabajos,
    TrabajosFinalizados,
    Categorias,
    Subcategorias,
    Productos,
    InventarioTienda,
    InventarioSucursal,
    Ventas,
    Pedidos,
    ReporteVentas,
    ReporteProduccion,
    ReporteInventario,
    Tiendas,
    Sucursales,
    ConfigWeb,
    Usuarios,
}

impl Seccion {
    pub fn label(self) -> &'static str {
        match self {
            Seccion::Proveedores => "Proveedores",
            Seccion::Telas => "Telas",
            Seccion::InventarioTelas => "Inventario de telas",
            Seccion::ParametrosTela => "Parámetros de prenda",
            Seccion::Costureros => "Costureros",
            Seccion::Trabajos => "Trabajos",
            Seccion::TrabajosFinalizados => "Trabajos finalizados",
            Seccion::Categorias => "Categorías",
            Seccion::Subcategorias => "Subcategorías",
            Seccion::Productos => "Productos",
            Seccion::InventarioTienda => "Inventario tienda",
            Seccion::InventarioSucursal => "Inventario sucursal",
            Seccion::Ventas => "Ventas",
            Seccion::Pedidos => "Pedidos web",
            Seccion::ReporteVentas => "Reporte de ventas",
            Seccion::ReporteProduccion => "Reporte de producción",
            Seccion::ReporteInventario => "Reporte de inventario",
            Seccion::Tiendas => "Tiendas",
            Seccion::Sucursales => "Sucursales",
            Seccion::ConfigWeb => "Configuración web",
            Seccion::Usuarios => "Usuarios",
        }
    }
}

/// Selected page. Routing stays out of the app: the centre just matches on
/// this signal.
#[derive(Clone, Copy)]
pub struct Navigation {
    pub active: RwSignal<Seccion>,
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Seccion::Productos),
        }
    }

    pub fn open(&self, seccion: Seccion) {
        if self.active.get_untracked() != seccion {
            log::debug!("open {:?}", seccion);
            self.active.set(seccion);
        }
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigation() -> Navigation {
    use_context::<Navigation>().expect("Navigation not found in context")
}

/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +---------+--------------------+
/// | Sidebar |      Center        |
/// +---------+--------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside class="app-sidebar">
                    <Sidebar />
                </aside>
                <main class="app-main">
                    <Center />
                </main>
            </div>
        </div>
    }
}
