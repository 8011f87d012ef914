use crate::shared::form::{
    EntityForm, FieldErrors, FieldSpec, FormEnum, FormReader, FormValues,
};

use super::aggregate::*;
use super::consumo::parse_consumo;

/// Campo del formulario que guarda el JSON de consumo por talla; lo edita un
/// componente propio, no aparece en el esquema.
pub const CONSUMO_FIELD: &str = "consumoTelaPorTalla";

impl EntityForm for ParametrosTelas {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("codigoReferencia", "Código de referencia").required(),
            FieldSpec::text("nombreModelo", "Nombre del modelo").required(),
            FieldSpec::text("tipoTelaRecomendada", "Tela recomendada").required(),
            FieldSpec::select::<EstadoPrenda>("estadoPrenda", "Estado")
                .required()
                .default_value("NUEVO"),
            FieldSpec::reference("productoId", "Producto asociado", "productos"),
            FieldSpec::decimal("cantidadTelaNecesaria", "Tela por unidad (kg)")
                .greater_than(0.0)
                .placeholder("Promedio de tallas si se deja vacío"),
            FieldSpec::decimal("tiempoFabricacionPorUnidad", "Tiempo por unidad (min)")
                .required()
                .greater_than(0.0),
            FieldSpec::integer("cantidadPorMedioDia", "Unidades por medio día").min(0.0),
            FieldSpec::textarea("observaciones", "Observaciones"),
        ]
    }

    fn blank() -> FormValues {
        FormValues::from_schema(&Self::schema()).with(CONSUMO_FIELD, "{}")
    }

    fn from_entity(p: &ParametrosTela) -> FormValues {
        FormValues::new()
            .with("codigoReferencia", &p.codigo_referencia)
            .with("nombreModelo", &p.nombre_modelo)
            .with("tipoTelaRecomendada", &p.tipo_tela_recomendada)
            .with("estadoPrenda", p.estado_prenda.code())
            .with_opt("productoId", p.producto_id)
            .with("cantidadTelaNecesaria", p.cantidad_tela_necesaria)
            .with("tiempoFabricacionPorUnidad", p.tiempo_fabricacion_por_unidad)
            .with_opt("cantidadPorMedioDia", p.cantidad_por_medio_dia)
            .with_opt("observaciones", p.observaciones.as_ref())
            .with(CONSUMO_FIELD, &p.consumo_tela_por_talla)
    }

    fn to_create(values: &FormValues) -> Result<CreateParametrosTelaDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);

        let consumo = parse_consumo(r.raw(CONSUMO_FIELD));
        if consumo.is_empty() {
            r.error(CONSUMO_FIELD, "Indique el consumo de al menos una talla");
        }
        let cantidad = r
            .opt_decimal("cantidadTelaNecesaria")
            .unwrap_or_else(|| average(consumo.total(), consumo.len()));

        let dto = CreateParametrosTelaDto {
            codigo_referencia: r.text("codigoReferencia"),
            nombre_modelo: r.text("nombreModelo"),
            tipo_tela_recomendada: r.text("tipoTelaRecomendada"),
            estado_prenda: r.choice("estadoPrenda"),
            producto_id: r.opt_int("productoId"),
            cantidad_tela_necesaria: cantidad,
            consumo_tela_por_talla: consumo.to_json(),
            tiempo_fabricacion_por_unidad: r.decimal("tiempoFabricacionPorUnidad"),
            cantidad_por_medio_dia: r.opt_int("cantidadPorMedioDia"),
            observaciones: r.opt_text("observaciones"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateParametrosTelaDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}

fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        crate::shared::form::round_to(total / count as f64, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormValues {
        ParametrosTelas::blank()
            .with("codigoReferencia", "PL-01")
            .with("nombreModelo", "Polo básico")
            .with("tipoTelaRecomendada", "Jersey 30/1")
            .with("tiempoFabricacionPorUnidad", "12")
    }

    #[test]
    fn requires_some_consumption() {
        let errors = ParametrosTelas::to_create(&filled()).unwrap_err();
        assert!(errors.contains(CONSUMO_FIELD));
    }

    #[test]
    fn quantity_defaults_to_average_consumption() {
        let values = filled().with(CONSUMO_FIELD, r#"{"S":0.4,"M":0.5,"L":0}"#);
        let dto = ParametrosTelas::to_create(&values).unwrap();
        assert_eq!(dto.cantidad_tela_necesaria, 0.45);
        assert_eq!(dto.consumo_tela_por_talla, r#"{"M":0.5,"S":0.4}"#);
        assert_eq!(dto.estado_prenda, EstadoPrenda::Nuevo);
    }
}
