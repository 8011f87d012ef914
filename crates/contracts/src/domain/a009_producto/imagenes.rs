//! Lista de imágenes guardada en el formulario como array JSON.

use crate::shared::config::{MAX_IMAGE_BYTES, MAX_PRODUCT_IMAGES};

pub const IMAGENES_FIELD: &str = "imagenes";

pub fn parse_imagenes(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(raw)
        .unwrap_or_default()
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect()
}

pub fn serialize_imagenes(imagenes: &[String]) -> String {
    serde_json::to_string(imagenes).unwrap_or_else(|_| "[]".to_string())
}

/// Motivo por el que no se puede añadir otra imagen, si lo hay.
pub fn check_nueva_imagen(actuales: usize, bytes: usize, mime: &str) -> Result<(), String> {
    if actuales >= MAX_PRODUCT_IMAGES {
        return Err(format!("Máximo {} imágenes por producto", MAX_PRODUCT_IMAGES));
    }
    if !mime.starts_with("image/") {
        return Err("El archivo debe ser una imagen".to_string());
    }
    if bytes > MAX_IMAGE_BYTES {
        return Err(format!(
            "La imagen supera {} MB",
            MAX_IMAGE_BYTES / (1024 * 1024)
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_blank_and_garbage() {
        assert_eq!(parse_imagenes(r#"["a","  ","b"]"#), vec!["a", "b"]);
        assert!(parse_imagenes("").is_empty());
        assert!(parse_imagenes("{}").is_empty());
    }

    #[test]
    fn upload_limits() {
        assert!(check_nueva_imagen(0, 1024, "image/png").is_ok());
        assert!(check_nueva_imagen(MAX_PRODUCT_IMAGES, 1024, "image/png").is_err());
        assert!(check_nueva_imagen(0, 1024, "application/pdf").is_err());
        assert!(check_nueva_imagen(0, MAX_IMAGE_BYTES + 1, "image/jpeg").is_err());
    }
}
