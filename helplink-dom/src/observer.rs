//! Observe a container for inserted form elements.

use helplink::{error::Error, Annotator};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};

use crate::base_element::DomElement;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>;

fn annotate_records(annotator: &Annotator, records: &js_sys::Array) -> usize {
    let mut linkified = 0;
    for record in records.iter() {
        let record: web_sys::MutationRecord = record.unchecked_into();
        let added = record.added_nodes();
        for i in 0..added.length() {
            // text and comment nodes carry no class
            let elem = match added.item(i).and_then(|x| x.dyn_into::<web_sys::Element>().ok()) {
                Some(x) => x,
                None => continue,
            };
            match annotator.annotate(&DomElement::new(elem)) {
                Ok(x) => {
                    if x.is_linkified() {
                        linkified += 1;
                    }
                }
                Err(err) => {
                    log::error!("{}", err);
                }
            }
        }
    }
    linkified
}

/// A `MutationObserver` that annotates the elements inserted under a container.
///
/// The observation stops when this is dropped.
pub struct HelpLinkObserver {
    observer: web_sys::MutationObserver,
    annotator: Rc<Annotator>,
    _callback: ObserverCallback,
}

impl HelpLinkObserver {
    /// Observe the specified DOM element and its whole subtree.
    pub fn new_with_element(
        container: &web_sys::Element,
        annotator: Annotator,
    ) -> Result<Self, Error> {
        let annotator = Rc::new(annotator);
        let callback: ObserverCallback = {
            let annotator = annotator.clone();
            Closure::wrap(Box::new(
                move |records: js_sys::Array, _: web_sys::MutationObserver| {
                    annotate_records(&annotator, &records);
                },
            ) as Box<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>)
        };
        let observer = web_sys::MutationObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|err| crate::js_backend_error("Cannot create the mutation observer", &err))?;
        let options = web_sys::MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        observer
            .observe_with_options(container, &options)
            .map_err(|err| crate::js_backend_error("Cannot observe the container", &err))?;
        log::debug!("Observing {:?} for inserted form elements", DomElement::new(container.clone()));
        Ok(Self {
            observer,
            annotator,
            _callback: callback,
        })
    }

    /// Observe the DOM element with the `id`
    pub fn new_with_element_id(id: &str, annotator: Annotator) -> Result<Self, Error> {
        let container = crate::document()?
            .get_element_by_id(id)
            .ok_or_else(|| Error::backend(format!("Cannot find the element {:?}", id)))?;
        Self::new_with_element(&container, annotator)
    }

    /// Observe the DOM `<body>`
    pub fn new_with_document_body(annotator: Annotator) -> Result<Self, Error> {
        let body = crate::document()?
            .body()
            .ok_or_else(|| Error::backend("Cannot find the <body> element"))?;
        Self::new_with_element(&body, annotator)
    }

    /// Get the annotator.
    pub fn annotator(&self) -> &Annotator {
        &self.annotator
    }

    /// Handle the pending mutation records now instead of waiting for the callback.
    ///
    /// Returns the number of help blocks rewritten.
    pub fn take_records_and_annotate(&self) -> usize {
        let records = self.observer.take_records();
        annotate_records(&self.annotator, &records)
    }

    /// Stop observing.
    ///
    /// Pending records are dropped.
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for HelpLinkObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
