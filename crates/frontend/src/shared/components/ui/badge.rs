use contracts::menu::badge::BadgeView;
use leptos::prelude::*;

/// Menu badge: icon + label for recognised kinds, plain text otherwise.
///
/// `badge.markup` is built with the label already HTML-escaped, so it is safe
/// to inject as inner HTML.
#[component]
pub fn MenuBadge(badge: BadgeView) -> impl IntoView {
    let class = badge.class();
    let label = badge.label;

    view! {
        <span
            class=class
            title=label.clone()
            aria-label=label
            inner_html=badge.markup
        ></span>
    }
}
