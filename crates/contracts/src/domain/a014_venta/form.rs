use crate::shared::config::DEFAULT_TIENDA_ID;
use crate::shared::form::{
    EntityForm, FieldErrors, FieldSpec, FormEnum, FormReader, FormValues,
};

use super::aggregate::*;
use super::lineas::{build_venta, parse_lineas, serialize_lineas, LineaInput, ITEMS_FIELD};

impl EntityForm for Ventas {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::date("fecha", "Fecha").required(),
            FieldSpec::reference("sucursalId", "Sucursal", "sucursales"),
            FieldSpec::text("cliente", "Cliente"),
            FieldSpec::select::<MetodoPago>("metodoPago", "Método de pago")
                .required()
                .default_value("EFECTIVO"),
            FieldSpec::select::<EstadoVenta>("estado", "Estado")
                .required()
                .default_value("COMPLETADA"),
        ]
    }

    fn blank() -> FormValues {
        FormValues::from_schema(&Self::schema())
            .with("fecha", chrono::Local::now().date_naive())
            .with(ITEMS_FIELD, serialize_lineas(&[LineaInput::default()]))
    }

    fn from_entity(v: &Venta) -> FormValues {
        let lineas: Vec<LineaInput> = v.items.iter().map(LineaInput::from_item).collect();
        FormValues::new()
            .with("fecha", v.fecha)
            .with_opt("sucursalId", v.sucursal_id)
            .with_opt("cliente", v.cliente.as_ref())
            .with("metodoPago", v.metodo_pago.code())
            .with("estado", v.estado.code())
            .with(ITEMS_FIELD, serialize_lineas(&lineas))
    }

    fn to_create(values: &FormValues) -> Result<CreateVentaDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);

        let (items, total) = match build_venta(&parse_lineas(r.raw(ITEMS_FIELD))) {
            Ok(built) => built,
            Err(message) => {
                r.error(ITEMS_FIELD, message);
                (Vec::new(), 0.0)
            }
        };

        let dto = CreateVentaDto {
            fecha: r.date("fecha"),
            tienda_id: DEFAULT_TIENDA_ID,
            sucursal_id: r.opt_int("sucursalId"),
            usuario_id: None,
            cliente: r.opt_text("cliente"),
            metodo_pago: r.choice("metodoPago"),
            estado: r.choice("estado"),
            total,
            items,
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateVentaDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_has_one_empty_row_and_fails_on_it() {
        let errors = Ventas::to_create(&Ventas::blank()).unwrap_err();
        assert_eq!(errors.get(ITEMS_FIELD), Some("Fila 1: seleccione un producto"));
        assert!(!errors.contains("fecha"));
    }

    #[test]
    fn body_carries_items_and_total() {
        let lineas = vec![LineaInput {
            producto_id: "5".into(),
            cantidad: "3".into(),
            precio_unitario: "20".into(),
        }];
        let values = Ventas::blank()
            .with("fecha", "2024-06-01")
            .with("metodoPago", "TARJETA")
            .with(ITEMS_FIELD, serialize_lineas(&lineas));
        let dto = Ventas::to_create(&values).unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["total"], 60.0);
        assert_eq!(json["metodoPago"], "TARJETA");
        assert_eq!(json["items"][0]["subtotal"], 60.0);
        assert_eq!(json["fecha"], "2024-06-01");
    }
}
