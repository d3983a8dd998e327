//! Optional model assets. Each path resolves exactly once into a
//! `ModelAsset`: the parsed OBJ on success, the supplied placeholder on any
//! fetch or parse failure. Failures are logged at warn level and never
//! surface to the user.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::core::{parse_obj, MeshData, ModelAsset};

pub async fn load_model(url: &str, placeholder: MeshData) -> ModelAsset {
    let text = match fetch_text(url).await {
        Ok(t) => t,
        Err(e) => {
            log::warn!("[assets] fetch {url} failed ({e:?}), using placeholder");
            return ModelAsset::Fallback(placeholder);
        }
    };
    match parse_obj(&text) {
        Ok(mesh) => {
            log::info!(
                "[assets] {url}: {} vertices, {} triangles",
                mesh.vertices.len(),
                mesh.indices.len() / 3
            );
            ModelAsset::Loaded(mesh)
        }
        Err(e) => {
            log::warn!("[assets] parse {url} failed ({e}), using placeholder");
            ModelAsset::Fallback(placeholder)
        }
    }
}

async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }
    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}
