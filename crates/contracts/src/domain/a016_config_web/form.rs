use crate::shared::config::DEFAULT_TIENDA_ID;
use crate::shared::form::{EntityForm, FieldErrors, FieldSpec, FormReader, FormValues};

use super::aggregate::*;
use super::banners::{
    is_hex_color, normalizar_orden, parse_banners, serialize_banners, BANNERS_FIELD, LOGO_FIELD,
};

impl EntityForm for ConfigsWeb {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("nombreSitio", "Nombre del sitio").required(),
            FieldSpec::text("colorPrimario", "Color primario")
                .required()
                .placeholder("#1a73e8")
                .default_value("#1a73e8"),
            FieldSpec::text("whatsapp", "WhatsApp").placeholder("9 dígitos"),
            FieldSpec::email("emailContacto", "Email de contacto"),
        ]
    }

    fn blank() -> FormValues {
        FormValues::from_schema(&Self::schema())
            .with(LOGO_FIELD, "")
            .with(BANNERS_FIELD, "[]")
    }

    fn from_entity(c: &ConfigWeb) -> FormValues {
        FormValues::new()
            .with("nombreSitio", &c.nombre_sitio)
            .with("colorPrimario", &c.color_primario)
            .with_opt("whatsapp", c.whatsapp.as_ref())
            .with_opt("emailContacto", c.email_contacto.as_ref())
            .with_opt(LOGO_FIELD, c.logo.as_ref())
            .with(BANNERS_FIELD, serialize_banners(&c.banners))
    }

    fn to_create(values: &FormValues) -> Result<CreateConfigWebDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);

        let color_primario = r.text("colorPrimario");
        if !color_primario.is_empty() && !is_hex_color(&color_primario) {
            r.error("colorPrimario", "Use un color hexadecimal, p. ej. #1a73e8");
        }

        let whatsapp = r.opt_text("whatsapp").map(|w| w.replace(' ', ""));
        if whatsapp.as_ref().is_some_and(|w| {
            let digits = w.strip_prefix('+').unwrap_or(w);
            digits.len() < 9 || !digits.chars().all(|c| c.is_ascii_digit())
        }) {
            r.error("whatsapp", "Número de WhatsApp inválido");
        }

        let dto = CreateConfigWebDto {
            tienda_id: DEFAULT_TIENDA_ID,
            nombre_sitio: r.text("nombreSitio"),
            logo: r.opt_text(LOGO_FIELD),
            color_primario,
            whatsapp,
            email_contacto: r.opt_text("emailContacto"),
            banners: normalizar_orden(parse_banners(r.raw(BANNERS_FIELD))),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateConfigWebDto, FieldErrors> {
        Self::to_create(values).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_and_whatsapp_checks() {
        let values = ConfigsWeb::blank()
            .with("nombreSitio", "Confecciones Rosa")
            .with("colorPrimario", "azul")
            .with("whatsapp", "12ab");
        let errors = ConfigsWeb::to_create(&values).unwrap_err();
        assert!(errors.contains("colorPrimario"));
        assert_eq!(errors.get("whatsapp"), Some("Número de WhatsApp inválido"));
    }

    #[test]
    fn logo_and_banners_go_in_the_body() {
        let values = ConfigsWeb::blank()
            .with("nombreSitio", "Confecciones Rosa")
            .with("whatsapp", "+51 987 654 321")
            .with(LOGO_FIELD, "data:image/png;base64,AA==")
            .with(
                BANNERS_FIELD,
                r#"[{"imagen":"b.png","orden":5},{"imagen":"a.png","orden":1}]"#,
            );
        let dto = ConfigsWeb::to_create(&values).unwrap();
        assert_eq!(dto.whatsapp.as_deref(), Some("+51987654321"));
        assert_eq!(dto.logo.as_deref(), Some("data:image/png;base64,AA=="));
        assert_eq!(dto.banners[0].imagen, "a.png");
        assert_eq!(dto.banners[1].orden, 2);
    }
}
