//! DOM pointer helpers: event coordinates, element geometry, control hits.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use notes::geometry::Point;

/// Selector for interactive children of a card (buttons, textarea) whose
/// events must not start a drag or open the editor.
pub const CONTROL_SELECTOR: &str = ".note-card__control";

/// Viewport-space pointer position of a mouse or pointer event.
pub fn client_point(ev: &leptos::ev::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Express a viewport-space point relative to an element's top-left corner.
pub fn offset_within(client: Point, origin: Point) -> Point {
    client - origin
}

/// Viewport-space top-left corner of an element.
#[cfg(feature = "hydrate")]
pub fn element_origin(element: &web_sys::Element) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}

/// Rendered size of an element in CSS pixels.
#[cfg(feature = "hydrate")]
pub fn element_size(element: &web_sys::Element) -> notes::geometry::Size {
    let rect = element.get_bounding_client_rect();
    notes::geometry::Size::new(rect.width(), rect.height())
}

/// Pointer position relative to `element`, e.g. the grab point inside a card
/// or the pointer's location on the board.
#[cfg(feature = "hydrate")]
pub fn point_in(ev: &leptos::ev::MouseEvent, element: &web_sys::Element) -> Point {
    offset_within(client_point(ev), element_origin(element))
}

/// Whether the event originated inside an element matching `selector`.
/// Always false outside the browser.
pub fn event_hits(ev: &leptos::ev::Event, selector: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        ev.target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(selector).ok().flatten())
            .is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, selector);
        false
    }
}
