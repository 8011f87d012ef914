use crate::shared::config::{DEFAULT_TIENDA_ID, MAX_PRODUCT_IMAGES};
use crate::shared::form::{EntityForm, FieldErrors, FieldSpec, FormReader, FormValues};

use super::aggregate::*;
use super::imagenes::{parse_imagenes, serialize_imagenes, IMAGENES_FIELD};

impl EntityForm for Productos {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("codigo", "Código"),
            FieldSpec::text("nombre", "Nombre").required(),
            FieldSpec::textarea("descripcion", "Descripción"),
            FieldSpec::decimal("precio", "Precio").required().greater_than(0.0),
            FieldSpec::decimal("precioOferta", "Precio de oferta").greater_than(0.0),
            FieldSpec::integer("stock", "Stock").required().min(0.0).default_value("0"),
            FieldSpec::reference("categoriaId", "Categoría", "categorias"),
            FieldSpec::reference("subcategoriaId", "Subcategoría", "subcategorias"),
            FieldSpec::boolean("activo", "Activo").default_value("true"),
            FieldSpec::boolean("destacado", "Destacado"),
        ]
    }

    fn blank() -> FormValues {
        FormValues::from_schema(&Self::schema()).with(IMAGENES_FIELD, "[]")
    }

    fn from_entity(p: &Producto) -> FormValues {
        FormValues::new()
            .with_opt("codigo", p.codigo.as_ref())
            .with("nombre", &p.nombre)
            .with_opt("descripcion", p.descripcion.as_ref())
            .with("precio", p.precio)
            .with_opt("precioOferta", p.precio_oferta)
            .with("stock", p.stock)
            .with_opt("categoriaId", p.categoria_id)
            .with_opt("subcategoriaId", p.subcategoria_id)
            .with("activo", p.activo)
            .with("destacado", p.destacado)
            .with(IMAGENES_FIELD, serialize_imagenes(&p.imagenes))
    }

    fn to_create(values: &FormValues) -> Result<CreateProductoDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);

        let precio = r.decimal("precio");
        let precio_oferta = r.opt_decimal("precioOferta");
        if let Some(oferta) = precio_oferta {
            if !r.has_error("precio") && oferta >= precio {
                r.error("precioOferta", "La oferta debe ser menor que el precio");
            }
        }

        let categoria_id = r.opt_int("categoriaId");
        let subcategoria_id = r.opt_int("subcategoriaId");
        if subcategoria_id.is_some() && categoria_id.is_none() {
            r.error("subcategoriaId", "Seleccione primero una categoría");
        }

        let imagenes = parse_imagenes(r.raw(IMAGENES_FIELD));
        if imagenes.len() > MAX_PRODUCT_IMAGES {
            r.error(
                IMAGENES_FIELD,
                format!("Máximo {} imágenes por producto", MAX_PRODUCT_IMAGES),
            );
        }

        let dto = CreateProductoDto {
            codigo: r.opt_text("codigo"),
            nombre: r.text("nombre"),
            descripcion: r.opt_text("descripcion"),
            precio,
            precio_oferta,
            stock: r.int("stock"),
            categoria_id,
            subcategoria_id,
            tienda_id: DEFAULT_TIENDA_ID,
            imagenes,
            activo: r.boolean("activo"),
            destacado: r.boolean("destacado"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateProductoDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormValues {
        Productos::blank()
            .with("nombre", "Polo cuello V")
            .with("precio", "39.90")
    }

    #[test]
    fn offer_must_be_lower_than_price() {
        let errors = Productos::to_create(&filled().with("precioOferta", "45")).unwrap_err();
        assert_eq!(
            errors.get("precioOferta"),
            Some("La oferta debe ser menor que el precio")
        );
    }

    #[test]
    fn subcategory_needs_category() {
        let errors = Productos::to_create(&filled().with("subcategoriaId", 3)).unwrap_err();
        assert!(errors.contains("subcategoriaId"));
    }

    #[test]
    fn images_travel_inside_the_json_body() {
        let values = filled().with(IMAGENES_FIELD, r#"["data:image/png;base64,AAA="]"#);
        let dto = Productos::to_create(&values).unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["imagenes"][0], "data:image/png;base64,AAA=");
        assert_eq!(json["stock"], 0);
        assert_eq!(json.get("categoriaId"), None);
    }

    #[test]
    fn cleared_optionals_are_sent_as_null_on_edit() {
        let stored = Producto {
            id: 4,
            codigo: None,
            nombre: "Polo".into(),
            descripcion: None,
            precio: 40.0,
            precio_oferta: Some(35.0),
            stock: 3,
            categoria_id: Some(1),
            subcategoria_id: Some(10),
            tienda_id: DEFAULT_TIENDA_ID,
            imagenes: vec![],
            activo: true,
            destacado: false,
        };
        let values = Productos::from_entity(&stored)
            .with("categoriaId", 2)
            .with("subcategoriaId", "")
            .with("precioOferta", "");

        let dto = Productos::to_update(&values).unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["categoriaId"], 2);
        assert_eq!(json.get("subcategoriaId"), Some(&serde_json::Value::Null));
        assert_eq!(json.get("precioOferta"), Some(&serde_json::Value::Null));
        assert_eq!(json["precio"], 40.0);
    }
}
