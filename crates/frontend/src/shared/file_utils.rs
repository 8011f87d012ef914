//! Reading picked files into `data:` URIs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

/// `data:<mime>;base64,<payload>`
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

pub fn is_data_uri(value: &str) -> bool {
    value.starts_with("data:")
}

/// Rough payload size of a data URI, for display.
pub fn data_uri_size(value: &str) -> usize {
    match value.split_once(',') {
        Some((_, payload)) => payload.len() / 4 * 3,
        None => 0,
    }
}

/// A file chosen in an `<input type="file">`.
pub struct PickedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl PickedFile {
    pub fn data_uri(&self) -> String {
        to_data_uri(&self.mime, &self.bytes)
    }
}

pub async fn read_file(file: &File) -> Result<PickedFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("No se pudo leer {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(PickedFile {
        name: file.name(),
        mime: file.type_(),
        bytes,
    })
}

/// Files currently selected in the input that fired `ev`.
pub fn files_from_event(ev: &web_sys::Event) -> Vec<File> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };
    let files = (0..list.length()).filter_map(|i| list.get(i)).collect();
    // allow picking the same file again
    input.set_value("");
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_png_bytes() {
        let uri = to_data_uri("image/png", &[0x89, b'P', b'N', b'G']);
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
        assert!(is_data_uri(&uri));
        assert_eq!(data_uri_size(&uri), 6);
    }

    #[test]
    fn unknown_mime_falls_back() {
        assert_eq!(to_data_uri("", b"hi"), "data:application/octet-stream;base64,aGk=");
        assert!(!is_data_uri("https://cdn.example.com/a.png"));
    }
}
