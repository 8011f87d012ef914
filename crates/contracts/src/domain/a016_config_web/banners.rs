use super::aggregate::Banner;

pub const BANNERS_FIELD: &str = "banners";
pub const LOGO_FIELD: &str = "logo";

pub fn parse_banners(raw: &str) -> Vec<Banner> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub fn serialize_banners(banners: &[Banner]) -> String {
    serde_json::to_string(banners).unwrap_or_else(|_| "[]".to_string())
}

/// Ordena por `orden` y renumera 1..n sin huecos.
pub fn normalizar_orden(mut banners: Vec<Banner>) -> Vec<Banner> {
    banners.sort_by_key(|b| b.orden);
    for (idx, banner) in banners.iter_mut().enumerate() {
        banner.orden = idx as i64 + 1;
    }
    banners
}

/// Mueve el banner `idx` una posición arriba (`-1`) o abajo (`1`).
pub fn mover(banners: Vec<Banner>, idx: usize, delta: isize) -> Vec<Banner> {
    let mut banners = normalizar_orden(banners);
    let target = idx as isize + delta;
    if idx < banners.len() && target >= 0 && (target as usize) < banners.len() {
        banners.swap(idx, target as usize);
    }
    normalizar_orden_en_sitio(&mut banners);
    banners
}

pub fn quitar(banners: Vec<Banner>, idx: usize) -> Vec<Banner> {
    let mut banners = normalizar_orden(banners);
    if idx < banners.len() {
        banners.remove(idx);
    }
    normalizar_orden_en_sitio(&mut banners);
    banners
}

pub fn agregar(banners: Vec<Banner>, imagen: String) -> Vec<Banner> {
    let mut banners = normalizar_orden(banners);
    let orden = banners.len() as i64 + 1;
    banners.push(Banner {
        imagen,
        titulo: None,
        enlace: None,
        orden,
        activo: true,
    });
    banners
}

fn normalizar_orden_en_sitio(banners: &mut [Banner]) {
    for (idx, banner) in banners.iter_mut().enumerate() {
        banner.orden = idx as i64 + 1;
    }
}

/// `#RGB` o `#RRGGBB`.
pub fn is_hex_color(raw: &str) -> bool {
    let Some(hex) = raw.trim().strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner(imagen: &str, orden: i64) -> Banner {
        Banner {
            imagen: imagen.into(),
            titulo: None,
            enlace: None,
            orden,
            activo: true,
        }
    }

    fn imagenes(banners: &[Banner]) -> Vec<&str> {
        banners.iter().map(|b| b.imagen.as_str()).collect()
    }

    #[test]
    fn order_is_renumbered_without_gaps() {
        let out = normalizar_orden(vec![banner("b", 7), banner("a", 2), banner("c", 9)]);
        assert_eq!(imagenes(&out), vec!["a", "b", "c"]);
        assert_eq!(out.iter().map(|b| b.orden).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn move_and_remove() {
        let list = vec![banner("a", 1), banner("b", 2), banner("c", 3)];
        let moved = mover(list.clone(), 2, -1);
        assert_eq!(imagenes(&moved), vec!["a", "c", "b"]);
        assert_eq!(moved[1].orden, 2);

        let unchanged = mover(list.clone(), 0, -1);
        assert_eq!(imagenes(&unchanged), vec!["a", "b", "c"]);

        let removed = quitar(list, 0);
        assert_eq!(imagenes(&removed), vec!["b", "c"]);
        assert_eq!(removed[0].orden, 1);
    }

    #[test]
    fn add_appends_at_the_end() {
        let out = agregar(vec![banner("a", 1)], "data:image/png;base64,AA==".into());
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].orden, 2);
    }

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#1a73e8"));
        assert!(is_hex_color("#FFF"));
        assert!(!is_hex_color("1a73e8"));
        assert!(!is_hex_color("#12345g"));
    }
}
