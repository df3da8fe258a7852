//! Компактная вёрстка для печати.
//!
//! Перед печатью меряем страницу и, если шапка вместе с меню не влезает
//! на лист A4, вешаем на `<body>` класс `print-compact`. После печати класс
//! снимается всегда.

pub mod geometry;

use geometry::{needs_compaction, PageGeometry, COMPACT_CLASS, CSS_PX_PER_MM};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement};

const RULER_STYLE: &str =
    "position:absolute;left:-9999px;top:0;width:10mm;height:100mm;visibility:hidden;";

/// Невидимый блок за пределами экрана; удаляется из DOM при drop.
struct Ruler {
    element: Element,
}

impl Ruler {
    fn attach(document: &Document, body: &HtmlElement) -> Option<Self> {
        let element = document.create_element("div").ok()?;
        element.set_attribute("style", RULER_STYLE).ok()?;
        body.append_child(&element).ok()?;
        Some(Self { element })
    }

    fn height_px(&self) -> f64 {
        self.element.get_bounding_client_rect().height()
    }
}

impl Drop for Ruler {
    fn drop(&mut self) {
        self.element.remove();
    }
}

fn measure_px_per_mm(document: &Document, body: &HtmlElement) -> f64 {
    match Ruler::attach(document, body) {
        Some(ruler) => geometry::px_per_mm(ruler.height_px()),
        None => CSS_PX_PER_MM,
    }
}

fn element_height(document: &Document, selector: &str) -> Option<f64> {
    let element = document.query_selector(selector).ok().flatten()?;
    Some(element.get_bounding_client_rect().height())
}

/// Обработчик `beforeprint`
pub fn update_print_compaction() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let _ = body.class_list().remove_1(COMPACT_CLASS);

    let (Some(header), Some(main)) = (
        element_height(&document, "header"),
        element_height(&document, "main"),
    ) else {
        return;
    };

    let px_per_mm = measure_px_per_mm(&document, &body);
    let content = header + main;
    if needs_compaction(content, px_per_mm, PageGeometry::default()) {
        log::debug!(
            "print: content {:.0}px exceeds page {:.0}px, compacting",
            content,
            PageGeometry::default().available_px(px_per_mm)
        );
        let _ = body.class_list().add_1(COMPACT_CLASS);
    }
}

/// Обработчик `afterprint`
pub fn clear_print_compaction() {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().remove_1(COMPACT_CLASS);
    }
}

/// Подписаться на `beforeprint` / `afterprint` на всё время жизни страницы
pub fn install_print_listeners() {
    let Some(window) = window() else {
        return;
    };

    let before = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        update_print_compaction();
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("beforeprint", before.as_ref().unchecked_ref());
    before.forget(); // Keep the closure alive

    let after = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        clear_print_compaction();
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("afterprint", after.as_ref().unchecked_ref());
    after.forget();
}
