use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::motion::{LinearTransform, ScrollPublisher};

/// One publisher per app, fed by the window scroll position.
pub fn provide_scroll_publisher() {
    let publisher = ScrollPublisher::new();
    let (_, scroll_y) = use_window_scroll();
    let feed = publisher.clone();
    // effects only run in the browser, so the server renders offset 0
    Effect::new(move |_| feed.publish(scroll_y.get()));
    provide_context(publisher);
}

/// Tracks `transform` applied to the current scroll offset.
pub fn use_scroll_transform(transform: LinearTransform) -> ReadSignal<f64> {
    let publisher = use_context::<ScrollPublisher>().unwrap_or_default();
    let (value, set_value) = signal(transform.apply(publisher.offset()));
    let id = publisher.subscribe(move |offset| set_value.set(transform.apply(offset)));
    on_cleanup(move || {
        publisher.unsubscribe(id);
    });
    value
}
