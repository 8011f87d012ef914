use crate::shared::form::{
    EntityForm, FieldErrors, FieldSpec, FormEnum, FormReader, FormValues,
};

use super::aggregate::*;

impl EntityForm for TrabajosFinalizados {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::reference("trabajoId", "Trabajo", "trabajos").required(),
            FieldSpec::date("fechaFinalizacion", "Fecha de finalización").required(),
            FieldSpec::integer("cantidadProducida", "Unidades producidas")
                .required()
                .min(0.0),
            FieldSpec::integer("cantidadFallas", "Unidades con fallas")
                .min(0.0)
                .default_value("0"),
            FieldSpec::select::<Calidad>("calidad", "Calidad")
                .required()
                .default_value("BUENA"),
            FieldSpec::decimal("costoTotal", "Costo total").min(0.0),
            FieldSpec::textarea("observaciones", "Observaciones"),
        ]
    }

    fn from_entity(t: &TrabajoFinalizado) -> FormValues {
        FormValues::new()
            .with("trabajoId", t.trabajo_id)
            .with("fechaFinalizacion", t.fecha_finalizacion)
            .with("cantidadProducida", t.cantidad_producida)
            .with("cantidadFallas", t.cantidad_fallas)
            .with("calidad", t.calidad.code())
            .with_opt("costoTotal", t.costo_total)
            .with_opt("observaciones", t.observaciones.as_ref())
    }

    fn to_create(values: &FormValues) -> Result<CreateTrabajoFinalizadoDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);

        let producida = r.int("cantidadProducida");
        let fallas = r.opt_int("cantidadFallas").unwrap_or(0);
        if producida == 0 && fallas == 0 && !r.has_error("cantidadProducida") {
            r.error("cantidadProducida", "Registre al menos una unidad");
        }

        let dto = CreateTrabajoFinalizadoDto {
            trabajo_id: r.int("trabajoId"),
            fecha_finalizacion: r.date("fechaFinalizacion"),
            cantidad_producida: producida,
            cantidad_fallas: fallas,
            calidad: r.choice("calidad"),
            costo_total: r.opt_decimal("costoTotal"),
            observaciones: r.opt_text("observaciones"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateTrabajoFinalizadoDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}
