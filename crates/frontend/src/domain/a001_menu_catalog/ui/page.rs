use super::slot::{MenuSlotView, MenuSlotViewProps};
use crate::layout::global_context::use_menu_context;
use crate::shared::components::ui::{Select, SelectOption};
use contracts::domain::a001_menu_catalog::{Catalog, MenuSlot};
use contracts::enums::category::Category;
use contracts::enums::meal::Meal;
use leptos::prelude::*;
use thaw::{Flex, FlexAlign, FlexGap, Spinner};

/// DOM id селектора дня
pub const DAY_SELECT_ID: &str = "dia-select";

fn day_label(day: &str) -> String {
    if day.parse::<u32>().is_ok() {
        format!("Día {}", day)
    } else {
        day.to_string()
    }
}

/// Строки селектора дня; выбранный день остаётся в списке, даже если его нет в каталоге
fn day_options(catalog: Option<&Catalog>, current: &str) -> Vec<SelectOption> {
    let mut ids = catalog.map(Catalog::day_ids).unwrap_or_else(|| Catalog::default().day_ids());
    if !ids.iter().any(|d| d == current) {
        ids.push(current.to_string());
    }
    ids.into_iter()
        .map(|id| {
            let label = day_label(&id);
            SelectOption::new(id, label)
        })
        .collect()
}

#[component]
fn MealSection(meal: Meal) -> impl IntoView {
    view! {
        <section class=format!("menu-meal menu-meal--{}", meal.code())>
            <h2 class="menu-meal__title">{meal.display_name()}</h2>
            {Category::all()
                .into_iter()
                .map(|category| MenuSlotView(MenuSlotViewProps { slot: MenuSlot::new(meal, category) }))
                .collect_view()}
        </section>
    }
}

/// Страница дневного меню
#[component]
pub fn MenuPage() -> impl IntoView {
    let ctx = use_menu_context();

    let days = Signal::derive(move || {
        let current = ctx.day.get();
        ctx.catalog.with(|c| day_options(c.as_deref(), &current))
    });

    view! {
        <header class="menu-header">
            <Flex align=FlexAlign::End gap=FlexGap::Large>
                <h1 class="menu-header__title">"Menú del día"</h1>
                <Select
                    id=DAY_SELECT_ID.to_string()
                    label="Día".to_string()
                    value=ctx.day
                    options=days
                    on_change=Callback::new(move |day: String| ctx.select_day(day))
                    disabled=Signal::derive(move || !ctx.is_loaded())
                />
                <Show when=move || !ctx.is_loaded()>
                    <Spinner />
                </Show>
            </Flex>
        </header>
        <main class="menu-main">
            {Meal::all()
                .into_iter()
                .map(|meal| view! { <MealSection meal=meal /> })
                .collect_view()}
        </main>
    }
}
