use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// `(value, label)` pairs for a select box.
pub type Options = Vec<(String, String)>;

/// Options for a closed enum, prefixed with an "all" entry.
pub fn enum_options<T: Copy>(
    all_label: &str,
    variants: &[T],
    value: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> Options {
    std::iter::once(("all".to_string(), all_label.to_string()))
        .chain(
            variants
                .iter()
                .map(|v| (value(*v).to_string(), label(*v).to_string())),
        )
        .collect()
}

/// Options for free-form categories, prefixed with an "all" entry.
pub fn category_options(all_label: &str, categories: &[&str]) -> Options {
    std::iter::once(("all".to_string(), all_label.to_string()))
        .chain(categories.iter().map(|c| (c.to_string(), c.to_string())))
        .collect()
}

/// Options for a sort key enum, no "all" entry.
pub fn sort_options<T: Copy>(
    variants: &[T],
    value: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> Options {
    variants
        .iter()
        .map(|v| (value(*v).to_string(), label(*v).to_string()))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SearchInputProps {
    pub value: String,
    pub placeholder: AttrValue,
    pub on_input: Callback<String>,
}

#[function_component(SearchInput)]
pub fn search_input(props: &SearchInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <label class="input input-bordered flex items-center gap-2 flex-1">
            <i class="fas fa-search opacity-50"></i>
            <input
                type="text"
                class="grow"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterSelectProps {
    pub value: String,
    pub options: Options,
    pub on_change: Callback<String>,
}

#[function_component(FilterSelect)]
pub fn filter_select(props: &FilterSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <select class="select select-bordered w-full md:w-48" {onchange}>
            {for props.options.iter().map(|(value, label)| html! {
                <option value={value.clone()} selected={*value == props.value}>{label}</option>
            })}
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsBarProps {
    pub visible: usize,
    pub total: usize,
    pub filtered: bool,
    pub noun: AttrValue,
}

#[function_component(ResultsBar)]
pub fn results_bar(props: &ResultsBarProps) -> Html {
    html! {
        <div class="flex items-center gap-2 text-sm opacity-80 my-4">
            <span>{format!("Showing {} of {} {}", props.visible, props.total, props.noun)}</span>
            {if props.filtered {
                html! { <span class="badge badge-outline badge-sm">{"Filtered"}</span> }
            } else {
                html! {}
            }}
        </div>
    }
}
