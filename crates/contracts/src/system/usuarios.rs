use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::default_true;
use crate::form_enum;
use crate::shared::form::{
    EntityForm, FieldErrors, FieldSpec, FormEnum, FormReader, FormValues,
};
use crate::shared::resource::{CachePolicy, Resource};

pub const MIN_PASSWORD_LEN: usize = 6;

form_enum! {
    pub enum Rol {
        Admin => ("ADMIN", "Administrador"),
        User => ("USER", "Usuario"),
        Vendedor => ("VENDEDOR", "Vendedor"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub email: String,
    pub nombre: String,
    pub rol: Rol,
    #[serde(default = "default_true")]
    pub activo: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUsuarioDto {
    pub email: String,
    pub password: String,
    pub nombre: String,
    pub rol: Rol,
    pub activo: bool,
}

/// La contraseña solo viaja si se escribió una nueva.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUsuarioDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol: Option<Rol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol: Option<Rol>,
}

pub struct Usuarios;

impl Resource for Usuarios {
    type Entity = Usuario;
    type CreateDto = CreateUsuarioDto;
    type UpdateDto = UpdateUsuarioDto;
    type ListParams = UsuarioFilters;

    const KEY: &'static str = "usuarios";
    const PATH: &'static str = "/usuarios";
    const POLICY: CachePolicy = CachePolicy::CATALOG;
    const ELEMENT_NAME: &'static str = "Usuario";
    const LIST_NAME: &'static str = "Usuarios";

    fn id(entity: &Usuario) -> i64 {
        entity.id
    }

    fn label(entity: &Usuario) -> String {
        format!("{} <{}>", entity.nombre, entity.email)
    }
}

impl EntityForm for Usuarios {
    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::email("email", "Email").required(),
            FieldSpec::password("password", "Contraseña").min_len(MIN_PASSWORD_LEN),
            FieldSpec::text("nombre", "Nombre").required(),
            FieldSpec::select::<Rol>("rol", "Rol").required().default_value("USER"),
            FieldSpec::boolean("activo", "Activo").default_value("true"),
        ]
    }

    fn from_entity(u: &Usuario) -> FormValues {
        FormValues::new()
            .with("email", &u.email)
            .with("password", "")
            .with("nombre", &u.nombre)
            .with("rol", u.rol.code())
            .with("activo", u.activo)
    }

    fn to_create(values: &FormValues) -> Result<CreateUsuarioDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);
        let dto = CreateUsuarioDto {
            email: r.text("email"),
            // obligatoria solo al crear
            password: r.text("password"),
            nombre: r.text("nombre"),
            rol: r.choice("rol"),
            activo: r.boolean("activo"),
        };
        r.finish(dto)
    }

    fn to_update(values: &FormValues) -> Result<UpdateUsuarioDto, FieldErrors> {
        let schema = Self::schema();
        let mut r = FormReader::new(&schema, values);
        let dto = UpdateUsuarioDto {
            email: Some(r.text("email")),
            password: r.opt_text("password"),
            nombre: Some(r.text("nombre")),
            rol: Some(r.choice("rol")),
            activo: Some(r.boolean("activo")),
        };
        r.finish(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::QueryKey;
    use crate::shared::resource::invalidation_roots;

    #[test]
    fn create_body_for_post() {
        let dto = CreateUsuarioDto {
            email: "a@b.com".into(),
            password: "123456".into(),
            nombre: "Ana".into(),
            rol: Rol::User,
            activo: true,
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({
                "email": "a@b.com",
                "password": "123456",
                "nombre": "Ana",
                "rol": "USER",
                "activo": true
            })
        );
        assert_eq!(Usuarios::PATH, "/usuarios");
    }

    #[test]
    fn mutation_invalidates_the_list_key() {
        let roots = invalidation_roots::<Usuarios>();
        let list_key = QueryKey::for_list::<Usuarios>(&UsuarioFilters::default());
        assert_eq!(list_key.segments(), vec!["usuarios"]);
        assert!(roots.iter().any(|root| *root == list_key.root()));
    }

    #[test]
    fn password_required_on_create_only() {
        let values = Usuarios::blank()
            .with("email", "ana@taller.pe")
            .with("nombre", "Ana");
        let errors = Usuarios::to_create(&values).unwrap_err();
        assert_eq!(errors.get("password"), Some(crate::shared::form::MSG_REQUIRED));

        let dto = Usuarios::to_update(&values).unwrap();
        assert_eq!(dto.password, None);
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn short_password_rejected() {
        let values = Usuarios::blank()
            .with("email", "ana@taller.pe")
            .with("nombre", "Ana")
            .with("password", "123");
        let errors = Usuarios::to_update(&values).unwrap_err();
        assert_eq!(errors.get("password"), Some("Debe tener al menos 6 caracteres"));
    }
}
