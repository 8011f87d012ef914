use crate::shared::config::DEFAULT_TIENDA_ID;
use crate::shared::form::{EntityForm, FieldErrors, FieldSpec, FormReader, FormValues};

use super::aggregate::*;

impl EntityForm for InventariosTienda {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::reference("productoId", "Producto", "productos").required(),
            FieldSpec::integer("stock", "Stock").required().min(0.0),
            FieldSpec::integer("stockMinimo", "Stock mínimo")
                .required()
                .min(0.0)
                .default_value("0"),
            FieldSpec::text("ubicacion", "Ubicación").placeholder("Estante / pasillo"),
            FieldSpec::reference("tiendaId", "Tienda", "tiendas")
                .required()
                .default_value("1"),
        ]
    }

    fn from_entity(i: &InventarioTienda) -> FormValues {
        FormValues::new()
            .with("productoId", i.producto_id)
            .with("stock", i.stock)
            .with("stockMinimo", i.stock_minimo)
            .with_opt("ubicacion", i.ubicacion.as_ref())
            .with("tiendaId", i.tienda_id)
    }

    fn to_create(values: &FormValues) -> Result<CreateInventarioTiendaDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);
        let dto = CreateInventarioTiendaDto {
            tienda_id: r.opt_int("tiendaId").unwrap_or(DEFAULT_TIENDA_ID),
            producto_id: r.int("productoId"),
            stock: r.int("stock"),
            stock_minimo: r.int("stockMinimo"),
            ubicacion: r.opt_text("ubicacion"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateInventarioTiendaDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stock_is_accepted() {
        let values = InventariosTienda::blank()
            .with("productoId", 7)
            .with("stock", "0");
        let dto = InventariosTienda::to_create(&values).unwrap();
        assert_eq!(dto.stock, 0);
        assert_eq!(dto.stock_minimo, 0);
        assert_eq!(dto.tienda_id, DEFAULT_TIENDA_ID);
    }

    #[test]
    fn negative_stock_is_rejected() {
        let values = InventariosTienda::blank()
            .with("productoId", 7)
            .with("stock", "-2");
        let errors = InventariosTienda::to_create(&values).unwrap_err();
        assert_eq!(errors.get("stock"), Some("Debe ser mayor o igual a 0"));
    }
}
