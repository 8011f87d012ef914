use crate::shared::form::{
    EntityForm, FieldErrors, FieldSpec, FormEnum, FormReader, FormValues,
};

use super::aggregate::*;

impl EntityForm for Trabajos {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("codigoTrabajo", "Código").required().placeholder("TRB-0001"),
            FieldSpec::reference("costureroId", "Costurero", "costureros").required(),
            FieldSpec::reference("parametrosTelaId", "Modelo de prenda", "parametros-tela")
                .required(),
            FieldSpec::integer("cantidad", "Cantidad").required().greater_than(0.0),
            FieldSpec::select::<EstadoTrabajo>("estado", "Estado")
                .required()
                .default_value("PENDIENTE"),
            FieldSpec::date("fechaInicio", "Fecha de inicio").required(),
            FieldSpec::date("fechaEntregaEstimada", "Entrega estimada"),
            FieldSpec::textarea("observaciones", "Observaciones"),
        ]
    }

    fn from_entity(t: &Trabajo) -> FormValues {
        FormValues::new()
            .with("codigoTrabajo", &t.codigo_trabajo)
            .with("costureroId", t.costurero_id)
            .with("parametrosTelaId", t.parametros_tela_id)
            .with("cantidad", t.cantidad)
            .with("estado", t.estado.code())
            .with("fechaInicio", t.fecha_inicio)
            .with_opt("fechaEntregaEstimada", t.fecha_entrega_estimada)
            .with_opt("observaciones", t.observaciones.as_ref())
    }

    fn to_create(values: &FormValues) -> Result<CreateTrabajoDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);

        let fecha_inicio = r.date("fechaInicio");
        let entrega = r.opt_date("fechaEntregaEstimada");
        if let Some(entrega) = entrega {
            if !r.has_error("fechaInicio") && entrega < fecha_inicio {
                r.error(
                    "fechaEntregaEstimada",
                    "La entrega no puede ser anterior al inicio",
                );
            }
        }

        let dto = CreateTrabajoDto {
            codigo_trabajo: r.text("codigoTrabajo"),
            costurero_id: r.int("costureroId"),
            parametros_tela_id: r.int("parametrosTelaId"),
            cantidad: r.int("cantidad"),
            estado: r.choice("estado"),
            fecha_inicio,
            fecha_entrega_estimada: entrega,
            observaciones: r.opt_text("observaciones"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateTrabajoDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_cannot_precede_start() {
        let values = Trabajos::blank()
            .with("codigoTrabajo", "TRB-0001")
            .with("costureroId", 1)
            .with("parametrosTelaId", 2)
            .with("cantidad", 50)
            .with("fechaInicio", "2024-05-10")
            .with("fechaEntregaEstimada", "2024-05-01");
        let errors = Trabajos::to_create(&values).unwrap_err();
        assert_eq!(
            errors.get("fechaEntregaEstimada"),
            Some("La entrega no puede ser anterior al inicio")
        );
    }

    #[test]
    fn quantity_must_be_positive() {
        let values = Trabajos::blank().with("cantidad", "0");
        let errors = Trabajos::to_create(&values).unwrap_err();
        assert_eq!(errors.get("cantidad"), Some("Debe ser mayor que 0"));
    }
}
