use crate::domain::a001_menu_catalog::ui::page::MenuPage;
use crate::layout::global_context::MenuGlobalContext;
use crate::shared::print;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the MenuGlobalContext (config, loaded catalog, selected day) via context.
    let ctx = MenuGlobalContext::new();
    provide_context(ctx);

    ctx.init_url_sync();
    ctx.load();

    print::install_print_listeners();

    view! {
        <MenuPage />
    }
}
