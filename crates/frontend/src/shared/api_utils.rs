//! Helpers around the page origin the catalog is fetched from.

/// Протокол страницы, например "http:" или "file:"
///
/// # Returns
/// - Empty string if window is not available
pub fn page_protocol() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().protocol().unwrap_or_default()
}

/// Страница открыта как локальный файл (`file://`), без HTTP сервера.
///
/// Such an origin usually blocks `fetch` of sibling files.
pub fn is_file_origin() -> bool {
    is_file_protocol(&page_protocol())
}

pub fn is_file_protocol(protocol: &str) -> bool {
    protocol.eq_ignore_ascii_case("file:")
}

/// Текущая строка запроса страницы (`?catalog=...`)
pub fn page_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}
