//! Handing finished exports to the user: browser downloads and the desktop
//! exports folder, plus clipboard copies.

use super::ExportError;

/// Deliver `bytes` as `filename`. Returns the saved path on desktop and
/// `None` when the browser took over the download.
pub async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let fail = |what: &str| ExportError::Delivery(what.to_string());

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| fail("failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| fail("unable to create download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| fail("document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| fail("unable to create anchor"))?
            .dyn_into()
            .map_err(|_| fail("anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| fail("missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = export_dir()?;
        let path = write_export(&dir, filename, &bytes)?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

pub async fn copy_to_clipboard(payload: String) -> Result<(), ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let fail = |what: &str| ExportError::Clipboard(what.to_string());

        let window = web_sys::window().ok_or_else(|| fail("window unavailable"))?;
        let document = window.document().ok_or_else(|| fail("document unavailable"))?;
        let body = document.body().ok_or_else(|| fail("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| fail("unable to create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| fail("textarea cast failed"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document
            .dyn_ref::<web_sys::HtmlDocument>()
            .and_then(|doc| doc.exec_command("copy").ok())
            .unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(fail("copy blocked"))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|err| ExportError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| ExportError::Clipboard(err.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Result<std::path::PathBuf, ExportError> {
    crate::core::storage::data_dir()
        .map(|dir| dir.join("exports"))
        .ok_or_else(|| ExportError::Delivery("unable to determine export directory".into()))
}

#[cfg(not(target_arch = "wasm32"))]
fn write_export(
    dir: &std::path::Path,
    filename: &str,
    bytes: &[u8],
) -> Result<std::path::PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes)?;
    Ok(path)
}
