//! SVG → pixels. Desktop renders with resvg; the browser draws the markup
//! onto an off-screen canvas.

use super::ExportError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    /// Straight (non-premultiplied) RGBA, row-major.
    pub rgba: Vec<u8>,
}

impl RasterImage {
    pub fn to_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut buffer = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buffer, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            encoder
                .write_header()
                .map_err(|err| ExportError::Encode(err.to_string()))?
                .write_image_data(&self.rgba)
                .map_err(|err| ExportError::Encode(err.to_string()))?;
        }
        Ok(buffer)
    }

    /// Flatten onto white, for consumers without an alpha channel.
    pub fn to_rgb(&self) -> Vec<u8> {
        self.rgba
            .chunks_exact(4)
            .flat_map(|px| {
                let alpha = u16::from(px[3]);
                let blend = |c: u8| ((u16::from(c) * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
                [blend(px[0]), blend(px[1]), blend(px[2])]
            })
            .collect()
    }
}

pub async fn rasterize_svg(svg: &str, width: u32, height: u32) -> Result<RasterImage, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        rasterize_web(svg, width, height).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        rasterize_native(svg, width, height)
    }
}

#[cfg(not(target_arch = "wasm32"))]
static FONTS: once_cell::sync::Lazy<std::sync::Arc<usvg::fontdb::Database>> =
    once_cell::sync::Lazy::new(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "font database loaded");
        std::sync::Arc::new(db)
    });

#[cfg(not(target_arch = "wasm32"))]
fn rasterize_native(svg: &str, width: u32, height: u32) -> Result<RasterImage, ExportError> {
    let mut options = usvg::Options::default();
    options.fontdb = FONTS.clone();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| ExportError::Render(err.to_string()))?;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ExportError::Render(format!("invalid canvas {width}x{height}")))?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    Ok(RasterImage {
        width,
        height,
        rgba,
    })
}

#[cfg(target_arch = "wasm32")]
async fn rasterize_web(svg: &str, width: u32, height: u32) -> Result<RasterImage, ExportError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url,
    };

    let fail = |what: &str| ExportError::Render(what.to_string());

    let opts = BlobPropertyBag::new();
    opts.set_type("image/svg+xml");
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(svg));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| fail("unable to build SVG blob"))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| fail("unable to create SVG URL"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| fail("document unavailable"))?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| fail("unable to create canvas"))?
        .dyn_into()
        .map_err(|_| fail("canvas cast failed"))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| fail("canvas context unavailable"))?
        .ok_or_else(|| fail("canvas context missing"))?
        .dyn_into()
        .map_err(|_| fail("context cast failed"))?;

    let image = HtmlImageElement::new().map_err(|_| fail("unable to create image"))?;
    image.set_src(&url);
    let decoded = JsFuture::from(image.decode()).await;
    Url::revoke_object_url(&url).ok();
    decoded.map_err(|_| fail("image decode failed"))?;

    let (w, h) = (f64::from(width), f64::from(height));
    context
        .draw_image_with_html_image_element_and_dw_and_dh(&image, 0.0, 0.0, w, h)
        .map_err(|_| fail("unable to draw image"))?;
    let data = context
        .get_image_data(0.0, 0.0, w, h)
        .map_err(|_| fail("unable to read pixels"))?;

    Ok(RasterImage {
        width,
        height,
        rgba: data.data().0,
    })
}
