// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

mod utils;

use js_sys::Array;
use wasm_bindgen::prelude::*;

use pathfit::{ReferenceBox, WriteOptions};

fn to_js(e: pathfit::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub fn init() {
    utils::set_panic_hook();
}

/// A path fitter for JavaScript callers.
///
/// Failures are thrown as strings.
#[wasm_bindgen]
pub struct Pathfit {
    inner: pathfit::Pathfit,
}

#[wasm_bindgen]
impl Pathfit {
    #[wasm_bindgen(constructor)]
    pub fn new(precision: Option<u32>) -> Pathfit {
        let options = match precision {
            Some(precision) => WriteOptions { precision: precision as usize },
            None => WriteOptions::default(),
        };

        Pathfit { inner: pathfit::Pathfit::with_options(options) }
    }

    #[wasm_bindgen(js_name = setViewbox)]
    pub fn set_viewbox(
        &mut self,
        width: Option<String>,
        height: Option<String>,
        view_box: Option<String>,
        preserve_aspect_ratio: Option<String>,
    ) -> Result<(), JsValue> {
        let attrs = ReferenceBox {
            width: width.as_deref(),
            height: height.as_deref(),
            view_box: view_box.as_deref(),
            preserve_aspect_ratio: preserve_aspect_ratio.as_deref(),
        };

        self.inner.set_viewbox(&attrs).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setAspectRatio)]
    pub fn set_aspect_ratio(&mut self, text: &str) -> Result<(), JsValue> {
        self.inner.set_aspect_ratio(text).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setObjectStyle)]
    pub fn set_object_style(
        &mut self,
        fit: Option<String>,
        position: Option<String>,
    ) -> Result<(), JsValue> {
        self.inner.set_object_style(fit.as_deref(), position.as_deref()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setObjectStyleCss)]
    pub fn set_object_style_css(&mut self, css: &str) -> Result<(), JsValue> {
        self.inner.set_object_style_css(css).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setCollapseLines)]
    pub fn set_collapse_lines(&mut self, collapse: bool) {
        self.inner.set_collapse_lines(collapse);
    }

    #[wasm_bindgen(js_name = setPath)]
    pub fn set_path(&mut self, path: &str, pretransform: Option<String>) -> Result<String, JsValue> {
        self.inner.set_path(path, pretransform.as_deref()).map_err(to_js)
    }

    pub fn transform(&self, text: &str) -> Result<String, JsValue> {
        self.inner.transform(text).map_err(to_js)
    }

    /// Applies an array of transform lists, in order.
    #[wasm_bindgen(js_name = transformAll)]
    pub fn transform_all(&self, parts: &Array) -> Result<String, JsValue> {
        let parts = parts.iter()
            .map(|v| v.as_string().ok_or_else(|| JsValue::from_str("expected a string")))
            .collect::<Result<Vec<String>, JsValue>>()?;

        self.inner.transform_all(parts.as_slice()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = scaleWithAspectRatio)]
    pub fn scale_with_aspect_ratio(&self, width: f64, height: f64) -> Result<String, JsValue> {
        self.inner.scale_with_aspect_ratio(width, height).map_err(to_js)
    }

    #[wasm_bindgen(js_name = scaleWithObjectFit)]
    pub fn scale_with_object_fit(&self, width: f64, height: f64) -> Result<String, JsValue> {
        self.inner.scale_with_object_fit(width, height).map_err(to_js)
    }
}
