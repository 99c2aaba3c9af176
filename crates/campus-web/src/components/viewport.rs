/// Viewport width signal driven by a media query

use leptos::*;

use crate::shell::Viewport;

/// Tracks [`WIDE_VIEWPORT_QUERY`](crate::config::WIDE_VIEWPORT_QUERY). Always
/// `Narrow` during server rendering; the stylesheet covers wide screens until
/// hydration catches up.
pub fn use_viewport() -> Signal<Viewport> {
    let (wide, set_wide) = create_signal(false);

    #[cfg(feature = "hydrate")]
    watch_media_query(set_wide);

    #[cfg(not(feature = "hydrate"))]
    let _ = set_wide;

    Signal::derive(move || Viewport::from_wide(wide.get()))
}

#[cfg(feature = "hydrate")]
fn watch_media_query(set_wide: WriteSignal<bool>) {
    use wasm_bindgen::{closure::Closure, JsCast};

    use crate::config::WIDE_VIEWPORT_QUERY;

    let Some(query) = web_sys::window().and_then(|w| w.match_media(WIDE_VIEWPORT_QUERY).ok().flatten()) else {
        tracing::warn!("matchMedia unavailable, assuming narrow viewport");
        return;
    };

    set_wide.set(query.matches());

    let listener = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |event: web_sys::MediaQueryListEvent| {
        set_wide.set(event.matches());
    });
    if query
        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!("failed to subscribe to viewport changes");
        return;
    }

    on_cleanup(move || {
        let _ = query.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
    });
}
