use crate::shared::form::{EntityForm, FieldErrors, FieldSpec, FormReader, FormValues};

use super::aggregate::*;

impl EntityForm for InventariosSucursal {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::reference("sucursalId", "Sucursal", "sucursales").required(),
            FieldSpec::reference("productoId", "Producto", "productos").required(),
            FieldSpec::integer("stock", "Stock").required().min(0.0),
            FieldSpec::integer("stockMinimo", "Stock mínimo")
                .required()
                .min(0.0)
                .default_value("0"),
            FieldSpec::text("ubicacion", "Ubicación"),
        ]
    }

    fn from_entity(i: &InventarioSucursal) -> FormValues {
        FormValues::new()
            .with("sucursalId", i.sucursal_id)
            .with("productoId", i.producto_id)
            .with("stock", i.stock)
            .with("stockMinimo", i.stock_minimo)
            .with_opt("ubicacion", i.ubicacion.as_ref())
    }

    fn to_create(values: &FormValues) -> Result<CreateInventarioSucursalDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);
        let dto = CreateInventarioSucursalDto {
            sucursal_id: r.int("sucursalId"),
            producto_id: r.int("productoId"),
            stock: r.int("stock"),
            stock_minimo: r.int("stockMinimo"),
            ubicacion: r.opt_text("ubicacion"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateInventarioSucursalDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}
