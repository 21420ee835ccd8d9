//! Blur listener binding
//!
//! Every matching `input` gets its own listener, once. Listener closures
//! are leaked so they live as long as the element's document; bound inputs
//! carry `BOUND_ATTRIBUTE` so later passes skip them.

use academy_forms_validation::{check_field, ClassList, FieldKind, ValidatorConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, DomTokenList, Element, HtmlInputElement, NodeList};

/// Set on an input once its blur listener is attached.
pub const BOUND_ATTRIBUTE: &str = "data-academy-forms-bound";

/// Class list of a live element
pub struct DomClasses(pub DomTokenList);

impl ClassList for DomClasses {
    type Error = JsValue;

    fn add(&mut self, token: &str) -> Result<(), JsValue> {
        self.0.add_1(token)
    }

    fn remove(&mut self, token: &str) -> Result<(), JsValue> {
        self.0.remove_1(token)
    }

    fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }
}

/// Runs `bind_all` once the document can be queried.
pub fn on_dom_ready(document: &Document, config: ValidatorConfig) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        bind_all(document, &config)?;
        return Ok(());
    }

    let target = document.clone();
    let callback = Closure::once_into_js(move || {
        if let Err(err) = bind_all(&target, &config) {
            console::error_2(&"academy-forms: binding failed".into(), &err);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
}

/// Binds every checked input in `document`. Returns the number bound.
pub fn bind_all(document: &Document, config: &ValidatorConfig) -> Result<u32, JsValue> {
    bind_matching(config, |selector| document.query_selector_all(selector))
}

/// Binds every checked input below `root`.
pub fn bind_within(root: &Element, config: &ValidatorConfig) -> Result<u32, JsValue> {
    bind_matching(config, |selector| root.query_selector_all(selector))
}

fn bind_matching<F>(config: &ValidatorConfig, select: F) -> Result<u32, JsValue>
where
    F: Fn(&str) -> Result<NodeList, JsValue>,
{
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    // select everything first so a failing query leaves nothing half-bound
    let passes = config
        .bindings()
        .map(|(kind, selector)| select(&selector).map(|nodes| (kind, nodes)))
        .collect::<Result<Vec<_>, JsValue>>()?;

    let mut bound = 0;
    for (kind, nodes) in passes {
        let mut count = 0;

        for i in 0..nodes.length() {
            let Some(input) = nodes
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
            else {
                continue;
            };
            if input.has_attribute(BOUND_ATTRIBUTE) {
                continue;
            }

            bind_input(&input, kind, &config.marker_class)?;
            count += 1;
        }

        console::debug_1(&format!("academy-forms: {count} {kind} field(s) bound").into());
        bound += count;
    }

    Ok(bound)
}

/// Attaches the blur check for `kind` to one input.
pub fn bind_input(input: &HtmlInputElement, kind: FieldKind, marker: &str) -> Result<(), JsValue> {
    let target = input.clone();
    let marker = marker.to_string();

    let listener = Closure::<dyn FnMut()>::new(move || {
        let mut classes = DomClasses(target.class_list());
        if let Err(err) = check_field(kind, &target.value(), &mut classes, &marker) {
            console::error_2(&"academy-forms: could not update marker class".into(), &err);
        }
    });

    input.add_event_listener_with_callback("blur", listener.as_ref().unchecked_ref())?;
    listener.forget();
    input.set_attribute(BOUND_ATTRIBUTE, kind.name())?;

    Ok(())
}
