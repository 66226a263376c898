//! Donation API Wrappers
//!
//! Frontend bindings to the platform's donation endpoints.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::{Mode, ProductsFormData};

/// Base path of the donation API, same origin as the client
const API_BASE: &str = "/api/v1/donate";

/// Fetch the form schema (county choices) for one flow mode
pub async fn fetch_products_form(mode: Mode) -> Result<ProductsFormData, String> {
    let url = format!("{}/form/?mode={}", API_BASE, mode.as_query());
    let json = fetch_json(&url).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

async fn fetch_json(url: &str) -> Result<JsValue, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    if !response.ok() {
        return Err(format!("{} returned status {}", url, response.status()));
    }

    JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)
}

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
