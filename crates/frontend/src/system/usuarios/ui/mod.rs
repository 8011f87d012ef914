use contracts::shared::form::{FieldSpec, FormEnum};
use contracts::system::usuarios::{Rol, Usuario, Usuarios};
use leptos::prelude::*;

use crate::shared::date_utils::format_datetime;
use crate::shared::form::{field_input, FormCtx};
use crate::shared::list::{crud_list_page, CellValue, Column, EntityUi, Tone};

fn rol_tone(rol: Rol) -> Tone {
    match rol {
        Rol::Admin => Tone::Danger,
        Rol::Vendedor => Tone::Informative,
        Rol::User => Tone::Subtle,
    }
}

impl EntityUi for Usuarios {
    const PAGE_ID: &'static str = "sys_usuario--list";

    fn columns() -> Vec<Column<Usuario>> {
        vec![
            Column::new("nombre", "Nombre", |u, _| u.nombre.as_str().into()),
            Column::new("email", "Email", |u, _| u.email.as_str().into()),
            Column::new("rol", "Rol", |u, _| {
                CellValue::Badge(u.rol.label().to_string(), rol_tone(u.rol))
            }),
            Column::new("activo", "Activo", |u, _| CellValue::Bool(u.activo)),
            Column::new("createdAt", "Alta", |u, _| {
                u.created_at.as_ref().map(format_datetime).into()
            }),
        ]
    }

    fn field_editor(field: &FieldSpec, form: FormCtx) -> Option<AnyView> {
        if field.name != "password" {
            return None;
        }
        let input = field_input(field, form);
        Some(
            view! {
                <div class="form-group--with-hint">
                    {input}
                    <div class="form-group__hint">
                        "Obligatoria al crear. Al editar, déjela vacía para conservar la actual."
                    </div>
                </div>
            }
            .into_any(),
        )
    }
}

#[component]
pub fn UsuarioList() -> impl IntoView {
    crud_list_page::<Usuarios>()
}
