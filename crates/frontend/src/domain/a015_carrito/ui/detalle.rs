use contracts::domain::a009_producto::aggregate::Productos;
use contracts::domain::a015_carrito::aggregate::{Carrito, Carritos, UpdateCarritoDto};
use contracts::shared::form::FormEnum;
use contracts::shared::resource::Resource;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::hooks::CrudHandle;
use crate::shared::lookups::Lookups;
use crate::shared::number_format::format_money;

use super::estado_tone;

#[component]
pub fn CarritoDetalle(
    carrito: Carrito,
    crud: CrudHandle<Carritos>,
    lookups: Signal<Lookups>,
    on_done: Callback<()>,
) -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let id = carrito.id;
    let estado = carrito.estado;
    // a mismatch means the stored total was not recomputed after an edit
    let total_lineas = carrito.total_items();
    let descuadre = (total_lineas - carrito.total).abs() >= 0.01;

    let cambiar = move |next| {
        error.set(None);
        spawn_local(async move {
            match crud.update(id, UpdateCarritoDto::estado(next)).await {
                Ok(_) => on_done.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let dato = |label: &'static str, value: Option<String>| {
        value.map(|value| view! {
            <div class="details-row">
                <span class="details-row__label">{label}</span>
                <span class="details-row__value">{value}</span>
            </div>
        })
    };

    view! {
        <div class="details-form">
            <div class="details-container">
                {dato("Cliente", Some(carrito.cliente_nombre.clone()))}
                {dato("Teléfono", carrito.cliente_telefono.clone())}
                {dato("Email", carrito.cliente_email.clone())}
                {dato("Dirección", carrito.direccion_entrega.clone())}
                {dato("Notas", carrito.notas.clone())}
                <div class="details-row">
                    <span class="details-row__label">"Estado"</span>
                    <Badge appearance=BadgeAppearance::Tint color=estado_tone(estado).color()>
                        {estado.label()}
                    </Badge>
                </div>
            </div>

            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Producto"</th>
                        <th class="table__header-cell">"Cantidad"</th>
                        <th class="table__header-cell">"Precio unit."</th>
                        <th class="table__header-cell">"Subtotal"</th>
                    </tr>
                </thead>
                <tbody>
                    {carrito.items.iter().map(|item| {
                        let producto_id = item.producto_id;
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">
                                    {move || lookups.with(|l| l.label(Productos::KEY, producto_id))}
                                </td>
                                <td class="table__cell table__cell--number">{item.cantidad}</td>
                                <td class="table__cell table__cell--number">{format_money(item.precio_unitario)}</td>
                                <td class="table__cell table__cell--number">{format_money(item.subtotal())}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <div class="details-row details-row--total">
                <span class="details-row__label">"Total"</span>
                <strong>{format_money(carrito.total)}</strong>
            </div>
            {descuadre.then(|| view! {
                <div class="warning-box">
                    <span class="warning-box__text">
                        {format!("La suma de las líneas es {}", format_money(total_lineas))}
                    </span>
                </div>
            })}

            {move || error.get().map(|message| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{message}</span>
                </div>
            })}

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_done.run(())>
                    "Cerrar"
                </Button>
                {estado.siguientes().iter().map(|&next| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || crud.is_updating.get())
                        on_click=move |_| cambiar(next)
                    >
                        {format!("Marcar {}", next.label().to_lowercase())}
                    </Button>
                }).collect_view()}
            </div>
        </div>
    }
}
