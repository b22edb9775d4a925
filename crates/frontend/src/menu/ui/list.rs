//! Menu region renderer.
//!
//! The region's children are produced from one `MenuView` value; a change of
//! that value replaces the whole subtree in a single pass.

use contracts::menu::view::{ItemRow, MenuView, SectionView};
use leptos::prelude::*;
use thaw::Spinner;

use crate::shared::components::ui::MenuBadge;

pub const MENU_ELEMENT_ID: &str = "menu";

#[component]
pub fn MenuList(
    /// Display tree to render
    #[prop(into)]
    menu: Signal<MenuView>,
) -> impl IntoView {
    view! {
        <div id=MENU_ELEMENT_ID class="menu" aria-live="polite">
            {move || render_menu(menu.get())}
        </div>
    }
}

fn render_menu(menu: MenuView) -> AnyView {
    match menu {
        MenuView::Loading => view! {
            <div class="menu-loading">
                <Spinner />
            </div>
        }
        .into_any(),
        MenuView::LoadFailed { message } => view! { <p>{message}</p> }.into_any(),
        MenuView::Empty { title, hint } => view! {
            <div class="empty-state">
                <strong>{title}</strong>
                <br />
                {hint}
            </div>
        }
        .into_any(),
        MenuView::Sections(sections) => view! {
            {sections
                .into_iter()
                .map(|section| view! { <MenuSection section=section /> })
                .collect_view()}
        }
        .into_any(),
    }
}

#[component]
fn MenuSection(section: SectionView) -> impl IntoView {
    view! {
        <section class="menu-category">
            <h3>{section.name}</h3>
            {section.note.map(|note| view! {
                <p class="section-lead" style="margin-top: 0">{note}</p>
            })}
            <div class="menu-items">
                {section
                    .items
                    .into_iter()
                    .map(|row| view! { <MenuItemRow row=row /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn MenuItemRow(row: ItemRow) -> impl IntoView {
    let badges = (!row.badges.is_empty()).then(|| {
        view! {
            <div class="badges">
                {row
                    .badges
                    .into_iter()
                    .map(|badge| view! { <MenuBadge badge=badge /> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class="menu-item">
            <div>
                <h4>{row.name}</h4>
                {row.desc.map(|desc| view! { <p>{desc}</p> })}
                {badges}
            </div>
            <div>
                <div class="price">{row.price}</div>
            </div>
        </div>
    }
}
