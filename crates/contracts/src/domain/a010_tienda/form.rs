use crate::shared::form::{EntityForm, FieldErrors, FieldSpec, FormReader, FormValues};

use super::aggregate::*;

impl EntityForm for Tiendas {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("nombre", "Nombre").required(),
            FieldSpec::text("direccion", "Dirección"),
            FieldSpec::text("telefono", "Teléfono"),
            FieldSpec::email("email", "Email"),
            FieldSpec::text("ruc", "RUC").placeholder("11 dígitos"),
            FieldSpec::boolean("activo", "Activa").default_value("true"),
        ]
    }

    fn from_entity(t: &Tienda) -> FormValues {
        FormValues::new()
            .with("nombre", &t.nombre)
            .with_opt("direccion", t.direccion.as_ref())
            .with_opt("telefono", t.telefono.as_ref())
            .with_opt("email", t.email.as_ref())
            .with_opt("ruc", t.ruc.as_ref())
            .with("activo", t.activo)
    }

    fn to_create(values: &FormValues) -> Result<CreateTiendaDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);

        let ruc = r.opt_text("ruc");
        if ruc
            .as_ref()
            .is_some_and(|ruc| ruc.len() != 11 || !ruc.chars().all(|c| c.is_ascii_digit()))
        {
            r.error("ruc", "El RUC debe tener 11 dígitos");
        }

        let dto = CreateTiendaDto {
            nombre: r.text("nombre"),
            direccion: r.opt_text("direccion"),
            telefono: r.opt_text("telefono"),
            email: r.opt_text("email"),
            ruc,
            activo: r.boolean("activo"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateTiendaDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_checked_when_present() {
        let values = Tiendas::blank()
            .with("nombre", "Tienda Centro")
            .with("email", "centro@");
        let errors = Tiendas::to_create(&values).unwrap_err();
        assert!(errors.contains("email"));
        assert!(!errors.contains("ruc"));
    }
}
