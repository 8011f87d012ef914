//! Sidebar with the sections grouped by area; every group starts expanded.

use leptos::prelude::*;

use super::{use_navigation, Seccion};
use crate::shared::icons::icon;

struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: &'static [Seccion],
}

const MENU: &[MenuGroup] = &[
    MenuGroup {
        id: "taller",
        label: "Taller",
        icon: "taller",
        items: &[
            Seccion::Proveedores,
            Seccion::Telas,
            Seccion::InventarioTelas,
            Seccion::ParametrosTela,
            Seccion::Costureros,
            Seccion::Trabajos,
            Seccion::TrabajosFinalizados,
        ],
    },
    MenuGroup {
        id: "catalogo",
        label: "Catálogo",
        icon: "productos",
        items: &[Seccion::Categorias, Seccion::Subcategorias, Seccion::Productos],
    },
    MenuGroup {
        id: "inventario",
        label: "Inventario",
        icon: "inventario",
        items: &[Seccion::InventarioTienda, Seccion::InventarioSucursal],
    },
    MenuGroup {
        id: "ventas",
        label: "Ventas",
        icon: "ventas",
        items: &[Seccion::Ventas, Seccion::Pedidos],
    },
    MenuGroup {
        id: "reportes",
        label: "Reportes",
        icon: "reportes",
        items: &[
            Seccion::ReporteVentas,
            Seccion::ReporteProduccion,
            Seccion::ReporteInventario,
        ],
    },
    MenuGroup {
        id: "sistema",
        label: "Sistema",
        icon: "tiendas",
        items: &[
            Seccion::Tiendas,
            Seccion::Sucursales,
            Seccion::ConfigWeb,
            Seccion::Usuarios,
        ],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_navigation();
    let collapsed = RwSignal::new(Vec::<&'static str>::new());

    let toggle = move |id: &'static str| {
        collapsed.update(|ids| {
            if let Some(pos) = ids.iter().position(|x| *x == id) {
                ids.remove(pos);
            } else {
                ids.push(id);
            }
        });
    };

    view! {
        <div class="app-sidebar__content">
            {MENU.iter().map(|group| {
                let id = group.id;
                let is_open = move || !collapsed.get().contains(&id);
                view! {
                    <div>
                        <div class="app-sidebar__item" on:click=move |_| toggle(id)>
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_open
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_open>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&seccion| view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || nav.active.get() == seccion
                                        on:click=move |_| nav.open(seccion)
                                    >
                                        <div class="app-sidebar__item-content">
                                            <span>{seccion.label()}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
