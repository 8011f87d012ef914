//! Selección en cascada categoría → subcategoría.

use super::aggregate::Categoria;
use super::subcategoria::Subcategoria;

/// Subcategorías activas de la categoría elegida (vacío si no hay categoría).
pub fn subcategorias_de(categorias: &[Categoria], categoria_id: Option<i64>) -> Vec<Subcategoria> {
    let Some(id) = categoria_id else {
        return Vec::new();
    };
    categorias
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.subcategorias.iter().filter(|s| s.activo).cloned().collect())
        .unwrap_or_default()
}

/// Subcategoría que debe quedar seleccionada tras cambiar de categoría: se
/// conserva solo si pertenece a la nueva.
pub fn reconcile_subcategoria(
    categorias: &[Categoria],
    nueva_categoria_id: Option<i64>,
    subcategoria_actual: Option<i64>,
) -> Option<i64> {
    let sub = subcategoria_actual?;
    let categoria = categorias.iter().find(|c| Some(c.id) == nueva_categoria_id)?;
    categoria.contiene_subcategoria(sub).then_some(sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(id: i64, categoria_id: i64, activo: bool) -> Subcategoria {
        Subcategoria {
            id,
            nombre: format!("Sub {}", id),
            descripcion: None,
            categoria_id,
            activo,
        }
    }

    fn catalogo() -> Vec<Categoria> {
        vec![
            Categoria {
                id: 1,
                nombre: "Polos".into(),
                descripcion: None,
                tienda_id: 1,
                activo: true,
                subcategorias: vec![sub(10, 1, true), sub(11, 1, false)],
            },
            Categoria {
                id: 2,
                nombre: "Buzos".into(),
                descripcion: None,
                tienda_id: 1,
                activo: true,
                subcategorias: vec![sub(20, 2, true)],
            },
        ]
    }

    #[test]
    fn switching_category_resets_foreign_subcategory() {
        let cats = catalogo();
        assert_eq!(reconcile_subcategoria(&cats, Some(2), Some(10)), None);
        assert_eq!(reconcile_subcategoria(&cats, Some(1), Some(10)), Some(10));
        assert_eq!(reconcile_subcategoria(&cats, None, Some(10)), None);
        assert_eq!(reconcile_subcategoria(&cats, Some(99), Some(10)), None);
        assert_eq!(reconcile_subcategoria(&cats, Some(1), None), None);
    }

    #[test]
    fn options_follow_selected_category() {
        let cats = catalogo();
        let ids: Vec<i64> = subcategorias_de(&cats, Some(1)).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![10]);
        assert!(subcategorias_de(&cats, None).is_empty());
    }
}
