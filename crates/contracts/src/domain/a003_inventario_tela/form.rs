use crate::shared::form::{EntityForm, FieldErrors, FieldSpec, FormReader, FormValues};

use super::aggregate::*;
use super::importe::compute_importe;

impl EntityForm for InventarioTelas {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::reference("telaId", "Tela", "telas").required(),
            FieldSpec::reference("proveedorId", "Proveedor", "proveedores").required(),
            FieldSpec::text("tipoTela", "Tipo de tela").required(),
            FieldSpec::text("color", "Color").required(),
            FieldSpec::text("presentacion", "Presentación")
                .required()
                .default_value("ROLLO"),
            FieldSpec::integer("cantidadRollos", "Cantidad de rollos")
                .required()
                .min(0.0),
            FieldSpec::decimal("precioKG", "Precio por kg").required().greater_than(0.0),
            FieldSpec::decimal("pesoGrupo", "Peso del grupo (kg)")
                .required()
                .greater_than(0.0),
            FieldSpec::decimal("importe", "Importe")
                .min(0.0)
                .placeholder("Se calcula automáticamente"),
            FieldSpec::date("fechaCompra", "Fecha de compra"),
            FieldSpec::textarea("notas", "Notas"),
        ]
    }

    /// Un importe igual al calculado queda en blanco para que se recalcule
    /// si cambian el precio o el peso.
    fn from_entity(i: &InventarioTela) -> FormValues {
        let calculado = compute_importe(Some(i.precio_kg), Some(i.peso_grupo), None);
        let explicito = (calculado != Some(i.importe)).then_some(i.importe);

        FormValues::new()
            .with("telaId", i.tela_id)
            .with("proveedorId", i.proveedor_id)
            .with("tipoTela", &i.tipo_tela)
            .with("color", &i.color)
            .with("presentacion", &i.presentacion)
            .with("cantidadRollos", i.cantidad_rollos)
            .with("precioKG", i.precio_kg)
            .with("pesoGrupo", i.peso_grupo)
            .with_opt("importe", explicito)
            .with_opt("fechaCompra", i.fecha_compra)
            .with_opt("notas", i.notas.as_ref())
    }

    fn to_create(values: &FormValues) -> Result<CreateInventarioTelaDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);

        let precio_kg = r.decimal("precioKG");
        let peso_grupo = r.decimal("pesoGrupo");
        let explicit = r.opt_decimal("importe");
        let importe = compute_importe(Some(precio_kg), Some(peso_grupo), explicit)
            .unwrap_or_default();

        let dto = CreateInventarioTelaDto {
            tela_id: r.int("telaId"),
            proveedor_id: r.int("proveedorId"),
            color: r.text("color"),
            cantidad_rollos: r.int("cantidadRollos"),
            presentacion: r.text("presentacion"),
            tipo_tela: r.text("tipoTela"),
            precio_kg,
            peso_grupo,
            importe,
            fecha_compra: r.opt_date("fechaCompra"),
            notas: r.opt_text("notas"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateInventarioTelaDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormValues {
        InventarioTelas::blank()
            .with("telaId", 1)
            .with("proveedorId", 2)
            .with("tipoTela", "Jersey")
            .with("color", "Negro")
            .with("cantidadRollos", 4)
            .with("precioKG", "10")
            .with("pesoGrupo", "5")
    }

    #[test]
    fn importe_is_computed_when_blank() {
        let dto = InventarioTelas::to_create(&filled()).unwrap();
        assert_eq!(dto.importe, 50.0);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["precioKG"], 10.0);
        assert_eq!(json["importe"], 50.0);
    }

    #[test]
    fn explicit_importe_is_kept() {
        let dto = InventarioTelas::to_create(&filled().with("importe", "45.5")).unwrap();
        assert_eq!(dto.importe, 45.5);
    }

    #[test]
    fn zero_weight_is_rejected() {
        let errors = InventarioTelas::to_create(&filled().with("pesoGrupo", "0")).unwrap_err();
        assert_eq!(errors.get("pesoGrupo"), Some("Debe ser mayor que 0"));
    }

    fn stored(importe: f64) -> InventarioTela {
        InventarioTela {
            id: 7,
            tela_id: 1,
            proveedor_id: 2,
            color: "Negro".into(),
            cantidad_rollos: 4,
            presentacion: "ROLLO".into(),
            tipo_tela: "Jersey".into(),
            precio_kg: 10.0,
            peso_grupo: 5.0,
            importe,
            fecha_compra: None,
            notas: None,
        }
    }

    #[test]
    fn editing_the_price_recomputes_a_derived_importe() {
        let values = InventarioTelas::from_entity(&stored(50.0));
        assert_eq!(values.get("importe"), "");

        let dto = InventarioTelas::to_update(&values.with("precioKG", "12")).unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["precioKG"], 12.0);
        assert_eq!(json["importe"], 60.0);
    }

    #[test]
    fn a_hand_entered_importe_survives_edits() {
        let values = InventarioTelas::from_entity(&stored(45.5));
        assert_eq!(values.get("importe"), "45.5");

        let dto = InventarioTelas::to_update(&values.with("precioKG", "12")).unwrap();
        assert_eq!(dto.importe, Some(45.5));
    }
}
