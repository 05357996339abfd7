//! Глобальный слушатель нажатий для закрытия выпадающих панелей.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, Node};

const EVENT: &str = "mousedown";

/// Capture-phase `mousedown` listener on `document`.
///
/// Reports for every press whether it landed inside `container`. The
/// listener is removed when the value is dropped, so the owner keeps it
/// for exactly the lifetime of the widget.
pub struct OutsideClickListener {
    document: Document,
    callback: Closure<dyn FnMut(Event)>,
}

impl OutsideClickListener {
    pub fn attach(container: Node, on_press: impl Fn(bool) + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let callback = Closure::wrap(Box::new(move |event: Event| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .map(|node| container.contains(Some(&node)))
                .unwrap_or(false);
            on_press(inside);
        }) as Box<dyn FnMut(Event)>);

        document
            .add_event_listener_with_callback_and_bool(
                EVENT,
                callback.as_ref().unchecked_ref(),
                true,
            )
            .ok()?;

        Some(Self { document, callback })
    }
}

impl Drop for OutsideClickListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback_and_bool(
            EVENT,
            self.callback.as_ref().unchecked_ref(),
            true,
        );
    }
}
