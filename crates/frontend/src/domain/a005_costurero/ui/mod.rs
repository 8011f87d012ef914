use contracts::domain::a005_costurero::aggregate::{Costurero, Costureros, EstadoCosturero};
use contracts::shared::form::FormEnum;
use leptos::prelude::*;

use crate::shared::list::{crud_list_page, CellValue, Column, EntityUi, Tone};

impl EntityUi for Costureros {
    const PAGE_ID: &'static str = "a005_costurero--list";

    fn columns() -> Vec<Column<Costurero>> {
        vec![
            Column::new("nombre", "Nombre", |c, _| c.nombre_completo().into()),
            Column::new("dni", "DNI", |c, _| c.dni.as_str().into()),
            Column::new("telefono", "Teléfono", |c, _| c.telefono.clone().into()),
            Column::new("email", "Email", |c, _| c.email.clone().into()),
            Column::new("fechaIngreso", "Ingreso", |c, _| CellValue::Date(Some(c.fecha_ingreso))),
            Column::new("estado", "Estado", |c, _| {
                let tone = match c.estado {
                    EstadoCosturero::Activo => Tone::Success,
                    EstadoCosturero::Inactivo => Tone::Subtle,
                };
                CellValue::Badge(c.estado.label().to_string(), tone)
            }),
        ]
    }
}

#[component]
pub fn CostureroList() -> impl IntoView {
    crud_list_page::<Costureros>()
}
