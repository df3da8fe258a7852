use leptos::prelude::*;

/// Строка нативного `<select>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    /// CSS class of the `<option>`, empty for none
    pub class: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            class: String::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

/// Select component with label support
///
/// Options are keyed by position: menus may repeat a value (blank submenu rows).
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value; without it the browser keeps its default (first row)
    #[prop(optional, into)]
    value: Option<Signal<String>>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options to render, in order
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: Option<Signal<bool>>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                disabled=move || disabled.is_some_and(|d| d.get())
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each={move || options.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key={|(index, option)| (*index, option.clone())}
                    children={move |(_, option)| {
                        let val = option.value.clone();
                        let is_selected = move || value.is_some_and(|v| v.get() == val);
                        view! {
                            <option
                                value=option.value
                                class=option.class
                                selected=is_selected
                            >
                                {option.label}
                            </option>
                        }
                    }}
                />
            </select>
        </div>
    }
}
