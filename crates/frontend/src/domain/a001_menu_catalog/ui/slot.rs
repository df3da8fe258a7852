use crate::layout::global_context::use_menu_context;
use crate::shared::components::ui::{Select, SelectOption};
use contracts::domain::a001_menu_catalog::{
    resolve_options, select_by_name, MenuItem, MenuSlot, PrimaryEntry, SlotRender, SubmenuState,
};
use leptos::prelude::*;

/// Опции ячейки вместе с тем, как их рисовать
#[derive(Debug, Clone, PartialEq)]
struct SlotModel {
    options: Vec<MenuItem>,
    render: SlotRender,
}

/// Ячейка меню: основной селект с блюдами и селект подменю под ним.
///
/// Repopulates whenever the catalog or the selected day changes.
#[component]
pub fn MenuSlotView(slot: MenuSlot) -> impl IntoView {
    let ctx = use_menu_context();

    let selected = RwSignal::new(String::new());
    let submenu = RwSignal::new(SubmenuState::NoSubmenu);

    let model = Memo::new(move |_| {
        let day = ctx.day.get();
        ctx.catalog.with(|catalog| {
            catalog.as_deref().map(|catalog| {
                let options = resolve_options(catalog, &day, slot.meal, slot.category);
                let current = selected.get_untracked();
                let render = SlotRender::build(catalog, &options, Some(current.as_str()));
                SlotModel { options, render }
            })
        })
    });

    // repopulation resets the selection state of this slot
    Effect::new(move |_| {
        let (value, state) = model.with(|model| match model {
            Some(model) => (model.render.selected.clone(), model.render.submenu.clone()),
            None => (String::new(), SubmenuState::NoSubmenu),
        });
        selected.set(value);
        submenu.set(state);
    });

    let on_primary_change = Callback::new(move |value: String| {
        let state = ctx.catalog.with_untracked(|catalog| {
            let catalog = catalog.as_deref()?;
            model.with_untracked(|m| {
                m.as_ref()
                    .map(|m| select_by_name(catalog, &m.options, &value))
            })
        });
        selected.set(value);
        submenu.set(state.unwrap_or_default());
    });

    let primary_options = Signal::derive(move || {
        model.with(|model| {
            let entries = match model {
                Some(model) => model.render.entries.clone(),
                None => vec![PrimaryEntry::placeholder()],
            };
            entries
                .into_iter()
                .map(|e| {
                    let class = e.css_class();
                    SelectOption::new(e.value, e.label).with_class(class)
                })
                .collect::<Vec<_>>()
        })
    });

    let submenu_options = Signal::derive(move || {
        submenu.with(|state| {
            state
                .entries()
                .iter()
                .map(|e| SelectOption::new(e.value.clone(), e.label.clone()))
                .collect::<Vec<_>>()
        })
    });

    let submenu_visible = move || {
        let has_options = model.with(|m| m.as_ref().is_some_and(|m| m.render.has_options));
        has_options && submenu.with(SubmenuState::is_active)
    };

    view! {
        <div class="menu-slot">
            <Select
                id=slot.select_id()
                label=slot.category.display_name().to_string()
                value=selected
                options=primary_options
                on_change=on_primary_change
                disabled=Signal::derive(move || !ctx.is_loaded())
            />
            <div
                class="menu-slot__submenu"
                style:display=move || if submenu_visible() { "block" } else { "none" }
            >
                <Select id=slot.submenu_id() options=submenu_options />
            </div>
        </div>
    }
}
