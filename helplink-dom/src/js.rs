//! The JavaScript interface.
//!
//! ```js
//! import init, { HelpLinks } from "./helplink_dom.js";
//!
//! await init();
//! const links = new HelpLinks("settings");
//! // later
//! links.disconnect();
//! ```

use helplink::{error::Error, Annotator, Config};
use wasm_bindgen::prelude::*;

use crate::observer::HelpLinkObserver;

fn to_js_error(err: Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// A help link observer created from JavaScript.
#[wasm_bindgen]
pub struct HelpLinks {
    observer: HelpLinkObserver,
}

impl HelpLinks {
    fn create(container_id: Option<&str>, annotator: Annotator) -> Result<HelpLinks, Error> {
        let observer = match container_id {
            Some(id) => HelpLinkObserver::new_with_element_id(id, annotator)?,
            None => HelpLinkObserver::new_with_document_body(annotator)?,
        };
        Ok(Self { observer })
    }
}

#[wasm_bindgen]
impl HelpLinks {
    /// Observe the element with `container_id` , or the `<body>` if it is not given.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: Option<String>) -> Result<HelpLinks, JsValue> {
        Self::create(container_id.as_deref(), Annotator::default()).map_err(to_js_error)
    }

    /// Observe with a JSON configuration, e.g. `{ "anchor_text": "link" }` .
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        container_id: Option<String>,
        config_json: &str,
    ) -> Result<HelpLinks, JsValue> {
        let config: Config = serde_json::from_str(config_json).map_err(|err| {
            to_js_error(Error::InvalidConfig(err.to_string()))
        })?;
        let annotator = Annotator::new(config).map_err(to_js_error)?;
        Self::create(container_id.as_deref(), annotator).map_err(to_js_error)
    }

    /// Handle the pending insertions now, returning the number of help blocks rewritten.
    pub fn flush(&self) -> u32 {
        self.observer.take_records_and_annotate() as u32
    }

    /// Stop observing.
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Rewrite the URLs in a piece of markup with the default anchor.
#[wasm_bindgen(js_name = linkifyHelpText)]
pub fn linkify_help_text(markup: &str) -> String {
    helplink::linkify(markup).into_owned()
}
