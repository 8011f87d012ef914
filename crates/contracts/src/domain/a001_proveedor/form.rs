use crate::shared::form::{EntityForm, FieldErrors, FieldSpec, FormReader, FormValues};

use super::aggregate::*;

impl EntityForm for Proveedores {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("nombre", "Nombre / razón social").required(),
            FieldSpec::text("ruc", "RUC").placeholder("11 dígitos"),
            FieldSpec::text("telefono", "Teléfono"),
            FieldSpec::email("email", "Email"),
            FieldSpec::text("direccion", "Dirección"),
            FieldSpec::text("contacto", "Persona de contacto"),
            FieldSpec::boolean("activo", "Activo").default_value("true"),
        ]
    }

    fn from_entity(p: &Proveedor) -> FormValues {
        FormValues::new()
            .with("nombre", &p.nombre)
            .with_opt("ruc", p.ruc.as_ref())
            .with_opt("telefono", p.telefono.as_ref())
            .with_opt("email", p.email.as_ref())
            .with_opt("direccion", p.direccion.as_ref())
            .with_opt("contacto", p.contacto.as_ref())
            .with("activo", p.activo)
    }

    fn to_create(values: &FormValues) -> Result<CreateProveedorDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);

        let ruc = r.opt_text("ruc");
        if let Some(ruc) = &ruc {
            if ruc.len() != 11 || !ruc.chars().all(|c| c.is_ascii_digit()) {
                r.error("ruc", "El RUC debe tener 11 dígitos");
            }
        }

        let dto = CreateProveedorDto {
            nombre: r.text("nombre"),
            ruc,
            telefono: r.opt_text("telefono"),
            email: r.opt_text("email"),
            direccion: r.opt_text("direccion"),
            contacto: r.opt_text("contacto"),
            activo: r.boolean("activo"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateProveedorDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruc_must_have_eleven_digits() {
        let values = Proveedores::blank()
            .with("nombre", "Textiles Andinos")
            .with("ruc", "2060");
        let errors = Proveedores::to_create(&values).unwrap_err();
        assert_eq!(errors.get("ruc"), Some("El RUC debe tener 11 dígitos"));
    }

    #[test]
    fn optional_fields_are_omitted_from_the_body() {
        let values = Proveedores::blank().with("nombre", "Textiles Andinos");
        let dto = Proveedores::to_create(&values).unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "nombre": "Textiles Andinos", "activo": true })
        );
    }

    #[test]
    fn edit_form_round_trips_entity() {
        let p = Proveedor {
            id: 3,
            nombre: "Hilos SAC".into(),
            ruc: Some("20601234567".into()),
            telefono: None,
            email: Some("ventas@hilos.pe".into()),
            direccion: None,
            contacto: None,
            activo: false,
        };
        let dto = Proveedores::to_update(&Proveedores::from_entity(&p)).unwrap();
        assert_eq!(dto.nombre.as_deref(), Some("Hilos SAC"));
        assert_eq!(dto.ruc, Some(Some("20601234567".to_string())));
        assert_eq!(dto.activo, Some(false));
        assert_eq!(dto.telefono, Some(None));

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["telefono"], serde_json::Value::Null);
    }
}
