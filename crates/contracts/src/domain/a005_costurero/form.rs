use crate::shared::config::DEFAULT_TIENDA_ID;
use crate::shared::form::{
    EntityForm, FieldErrors, FieldSpec, FormEnum, FormReader, FormValues,
};

use super::aggregate::*;

impl EntityForm for Costureros {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("nombre", "Nombre").required(),
            FieldSpec::text("apellido", "Apellido").required(),
            FieldSpec::text("dni", "DNI").required().placeholder("8 dígitos"),
            FieldSpec::text("telefono", "Teléfono"),
            FieldSpec::email("email", "Email"),
            FieldSpec::text("direccion", "Dirección"),
            FieldSpec::date("fechaIngreso", "Fecha de ingreso").required(),
            FieldSpec::select::<EstadoCosturero>("estado", "Estado")
                .required()
                .default_value("ACTIVO"),
            FieldSpec::reference("tiendaId", "Tienda", "tiendas")
                .required()
                .default_value("1"),
        ]
    }

    fn from_entity(c: &Costurero) -> FormValues {
        FormValues::new()
            .with("nombre", &c.nombre)
            .with("apellido", &c.apellido)
            .with("dni", &c.dni)
            .with_opt("telefono", c.telefono.as_ref())
            .with_opt("email", c.email.as_ref())
            .with_opt("direccion", c.direccion.as_ref())
            .with("fechaIngreso", c.fecha_ingreso)
            .with("estado", c.estado.code())
            .with("tiendaId", c.tienda_id)
    }

    fn to_create(values: &FormValues) -> Result<CreateCostureroDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);

        let dni = r.text("dni");
        if !dni.is_empty() && (dni.len() != 8 || !dni.chars().all(|c| c.is_ascii_digit())) {
            r.error("dni", "El DNI debe tener 8 dígitos");
        }

        let dto = CreateCostureroDto {
            nombre: r.text("nombre"),
            apellido: r.text("apellido"),
            dni,
            telefono: r.opt_text("telefono"),
            email: r.opt_text("email"),
            direccion: r.opt_text("direccion"),
            fecha_ingreso: r.date("fechaIngreso"),
            estado: r.choice("estado"),
            tienda_id: r.opt_int("tiendaId").unwrap_or(DEFAULT_TIENDA_ID),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateCostureroDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dni_and_date_are_checked() {
        let values = Costureros::blank()
            .with("nombre", "Rosa")
            .with("apellido", "Quispe")
            .with("dni", "1234")
            .with("fechaIngreso", "2024-13-01");
        let errors = Costureros::to_create(&values).unwrap_err();
        assert_eq!(errors.get("dni"), Some("El DNI debe tener 8 dígitos"));
        assert!(errors.contains("fechaIngreso"));
    }

    #[test]
    fn serializes_dates_as_iso() {
        let values = Costureros::blank()
            .with("nombre", "Rosa")
            .with("apellido", "Quispe")
            .with("dni", "45678912")
            .with("fechaIngreso", "2024-02-01");
        let dto = Costureros::to_create(&values).unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["fechaIngreso"], "2024-02-01");
        assert_eq!(json["estado"], "ACTIVO");
        assert_eq!(json["tiendaId"], 1);
    }
}
