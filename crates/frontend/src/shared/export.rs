//! CSV export that opens cleanly in Excel (UTF-8 BOM, `;` separator).

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Rows that can be written to a CSV file.
pub trait ExcelExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

pub fn export_to_excel<T: ExcelExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let rows: Vec<Vec<String>> = data.iter().map(ExcelExportable::to_csv_row).collect();
    export_table(&T::headers(), &rows, filename)
}

/// Export rows whose columns are only known at runtime.
pub fn export_table<H: AsRef<str>>(
    headers: &[H],
    rows: &[Vec<String>],
    filename: &str,
) -> Result<(), String> {
    if rows.is_empty() {
        return Err("No hay datos para exportar".to_string());
    }
    let blob = create_csv_blob(&build_csv(headers, rows))?;
    download_blob(&blob, filename)
}

/// `nombre_2024-03-15.csv`
pub fn csv_filename(base: &str) -> String {
    format!(
        "{}_{}.csv",
        base.to_lowercase().replace(' ', "_"),
        chrono::Local::now().format("%Y-%m-%d")
    )
}

pub fn build_csv<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>]) -> String {
    let mut csv = String::from('\u{FEFF}');
    let header_line: Vec<String> = headers.iter().map(|h| escape_csv_cell(h.as_ref())).collect();
    csv.push_str(&header_line.join(";"));
    csv.push('\n');

    for row in rows {
        let escaped: Vec<String> = row.iter().map(|cell| escape_csv_cell(cell)).collect();
        csv.push_str(&escaped.join(";"));
        csv.push('\n');
    }
    csv
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("No se pudo crear el archivo: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_with_separator_or_quotes_are_quoted() {
        assert_eq!(escape_csv_cell("Polo"), "Polo");
        assert_eq!(escape_csv_cell("Polo; cuello"), "\"Polo; cuello\"");
        assert_eq!(escape_csv_cell("talla \"M\""), "\"talla \"\"M\"\"\"");
    }

    #[test]
    fn csv_starts_with_bom_and_header() {
        let csv = build_csv(&["Código", "Nombre"], &[vec!["P1".into(), "Polo".into()]]);
        assert_eq!(csv, "\u{FEFF}Código;Nombre\nP1;Polo\n");
    }
}
