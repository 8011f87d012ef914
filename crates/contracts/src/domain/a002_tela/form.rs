use crate::shared::form::{EntityForm, FieldErrors, FieldSpec, FormReader, FormValues};

use super::aggregate::*;

impl EntityForm for Telas {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("nombreComercial", "Nombre comercial").required(),
            FieldSpec::text("tipoTela", "Tipo de tela")
                .required()
                .placeholder("Jersey, French terry, Rib..."),
            FieldSpec::text("composicion", "Composición").placeholder("100% algodón"),
            FieldSpec::decimal("gramaje", "Gramaje (g/m²)").greater_than(0.0),
            FieldSpec::text("color", "Color"),
            FieldSpec::reference("proveedorId", "Proveedor", "proveedores").required(),
            FieldSpec::textarea("notas", "Notas"),
        ]
    }

    fn from_entity(t: &Tela) -> FormValues {
        FormValues::new()
            .with("nombreComercial", &t.nombre_comercial)
            .with("tipoTela", &t.tipo_tela)
            .with_opt("composicion", t.composicion.as_ref())
            .with_opt("gramaje", t.gramaje)
            .with_opt("color", t.color.as_ref())
            .with("proveedorId", t.proveedor_id)
            .with_opt("notas", t.notas.as_ref())
    }

    fn to_create(values: &FormValues) -> Result<CreateTelaDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);
        let dto = CreateTelaDto {
            nombre_comercial: r.text("nombreComercial"),
            tipo_tela: r.text("tipoTela"),
            composicion: r.opt_text("composicion"),
            gramaje: r.opt_decimal("gramaje"),
            color: r.opt_text("color"),
            proveedor_id: r.int("proveedorId"),
            notas: r.opt_text("notas"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateTelaDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}
