use crate::shared::config::DEFAULT_TIENDA_ID;
use crate::shared::form::{EntityForm, FieldErrors, FieldSpec, FormReader, FormValues};

use super::aggregate::*;

impl EntityForm for Categorias {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("nombre", "Nombre").required().min_len(2),
            FieldSpec::textarea("descripcion", "Descripción"),
            FieldSpec::boolean("activo", "Activa").default_value("true"),
        ]
    }

    fn from_entity(c: &Categoria) -> FormValues {
        FormValues::new()
            .with("nombre", &c.nombre)
            .with_opt("descripcion", c.descripcion.as_ref())
            .with("activo", c.activo)
    }

    fn to_create(values: &FormValues) -> Result<CreateCategoriaDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);
        let dto = CreateCategoriaDto {
            nombre: r.text("nombre"),
            descripcion: r.opt_text("descripcion"),
            tienda_id: DEFAULT_TIENDA_ID,
            activo: r.boolean("activo"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateCategoriaDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}
