//! Error taxonomy shared by services, hooks and forms.

use serde_json::Value;
use thiserror::Error;

use super::form::FieldErrors;

/// Everything a call to the backend (or the form that prepares it) can fail with.
///
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),

    #[error("No se pudo preparar la solicitud: {0}")]
    Serialize(String),

    #[error("Revise los campos marcados: {0}")]
    Validation(FieldErrors),
}

impl ApiError {
    /// Build an HTTP error from a non-2xx response.
    ///
    /// Prefers the server's `message` field (a string, or an array of strings
    /// as class-validator style backends send), then `error`, then the status
    /// text, then a bare `HTTP <status>`.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = server_message(body)
            .or_else(|| {
                let text = status_text.trim();
                (!text.is_empty()).then(|| text.to_string())
            })
            .unwrap_or_else(|| format!("HTTP {}", status));

        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Field errors for a form with the given field names.
    ///
    /// Besides client validation this maps a 400/422 whose messages all start
    /// with a field name (`"precio must be positive, nombre should not be
    /// empty"`) onto those fields. `None` if any message names no known field.
    pub fn field_errors_for(&self, fields: &[&str]) -> Option<FieldErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors.clone()),
            ApiError::Http { status: 400 | 422, message } => {
                let mut errors = FieldErrors::new();
                for part in message.split(", ") {
                    let field = part.split_whitespace().next()?;
                    if !fields.contains(&field) {
                        return None;
                    }
                    errors.insert(field, part);
                }
                (!errors.is_empty()).then_some(errors)
            }
            _ => None,
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let pick = |field: &str| -> Option<String> {
        match value.get(field)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Array(items) => {
                let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                (!parts.is_empty()).then(|| parts.join(", "))
            }
            _ => None,
        }
    };
    pick("message").or_else(|| pick("error"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_server_message_when_present() {
        let err = ApiError::from_response(409, "Conflict", r#"{"message":"El email ya existe"}"#);
        assert_eq!(err.to_string(), "El email ya existe");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn joins_message_arrays() {
        let body = r#"{"statusCode":400,"message":["precio must be positive","nombre should not be empty"]}"#;
        let err = ApiError::from_response(400, "Bad Request", body);
        assert_eq!(
            err.to_string(),
            "precio must be positive, nombre should not be empty"
        );
    }

    #[test]
    fn falls_back_to_status_text_then_code() {
        let err = ApiError::from_response(500, "Internal Server Error", "<html>");
        assert_eq!(err.to_string(), "Internal Server Error");

        let err = ApiError::from_response(502, "", "");
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn not_found_is_detected() {
        assert!(ApiError::from_response(404, "Not Found", "").is_not_found());
        assert!(!ApiError::Network("offline".into()).is_not_found());
    }

    #[test]
    fn bad_request_messages_map_onto_form_fields() {
        let body = r#"{"message":["precio must be positive","nombre should not be empty"]}"#;
        let err = ApiError::from_response(400, "Bad Request", body);
        let fields = ["nombre", "precio", "stock"];

        let errors = err.field_errors_for(&fields).unwrap();
        assert_eq!(errors.get("precio"), Some("precio must be positive"));
        assert_eq!(errors.get("nombre"), Some("nombre should not be empty"));

        let other = ApiError::from_response(400, "Bad Request", r#"{"message":"Stock insuficiente"}"#);
        assert_eq!(other.field_errors_for(&fields), None);

        let conflict = ApiError::from_response(409, "Conflict", r#"{"message":"nombre duplicado"}"#);
        assert_eq!(conflict.field_errors_for(&fields), None);
    }
}
