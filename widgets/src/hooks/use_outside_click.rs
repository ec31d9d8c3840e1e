use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Closes a floating panel when the user interacts outside of it.
///
/// While `open` is true, a document-level click listener checks whether the
/// event target is contained in the element behind `node`; if not,
/// `on_outside` fires so the owning component can close the panel and roll
/// back any in-progress selection. The listener is dropped when the panel
/// closes or the component unmounts.
#[hook]
pub fn use_outside_click(node: NodeRef, open: bool, on_outside: Callback<()>) {
    use_effect_with((node, open), move |(node, open)| {
        let listener = if *open {
            let node = node.clone();
            Some(EventListener::new(&gloo::utils::document(), "click", move |event| {
                let target = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok());
                if !is_inside_root(node.cast::<Element>(), target) {
                    on_outside.emit(());
                }
            }))
        } else {
            None
        };
        move || drop(listener)
    });
}

/// Containment decision behind the dismissal: a click only counts as inside
/// when both the panel root and the event target exist and the root contains
/// the target. An unmounted panel or a targetless event never counts.
fn is_inside_root(root: Option<Element>, target: Option<Element>) -> bool {
    match (root, target) {
        (Some(root), Some(element)) => root.contains(Some(&element)),
        _ => false,
    }
}
