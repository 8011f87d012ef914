use crate::shared::config::DEFAULT_TIENDA_ID;
use crate::shared::form::{EntityForm, FieldErrors, FieldSpec, FormReader, FormValues};

use super::aggregate::*;

impl EntityForm for Sucursales {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("nombre", "Nombre").required(),
            FieldSpec::text("direccion", "Dirección").required(),
            FieldSpec::text("telefono", "Teléfono"),
            FieldSpec::reference("tiendaId", "Tienda", "tiendas")
                .required()
                .default_value("1"),
            FieldSpec::boolean("activo", "Activa").default_value("true"),
        ]
    }

    fn from_entity(s: &Sucursal) -> FormValues {
        FormValues::new()
            .with("nombre", &s.nombre)
            .with("direccion", &s.direccion)
            .with_opt("telefono", s.telefono.as_ref())
            .with("tiendaId", s.tienda_id)
            .with("activo", s.activo)
    }

    fn to_create(values: &FormValues) -> Result<CreateSucursalDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);
        let dto = CreateSucursalDto {
            nombre: r.text("nombre"),
            direccion: r.text("direccion"),
            telefono: r.opt_text("telefono"),
            tienda_id: r.opt_int("tiendaId").unwrap_or(DEFAULT_TIENDA_ID),
            activo: r.boolean("activo"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateSucursalDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}
