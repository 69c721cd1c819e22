//! Form primitives shared by the run form and provider diagnostics.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FieldLabelProps {
    pub children: Children,
}

#[function_component(FieldLabel)]
pub(crate) fn field_label(props: &FieldLabelProps) -> Html {
    html! { <label class="field-label muted">{for props.children.iter()}</label> }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TextInputProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_input: Callback<String>,
}

#[function_component(TextInput)]
pub(crate) fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_input.emit(input.value());
        })
    };
    html! {
        <input
            class="input"
            type="text"
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            disabled={props.disabled}
            {oninput}
        />
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SelectInputProps {
    pub value: AttrValue,
    /// `(value, label)` pairs in display order.
    pub options: Vec<(AttrValue, AttrValue)>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<String>,
}

#[function_component(SelectInput)]
pub(crate) fn select_input(props: &SelectInputProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            on_change.emit(select.value());
        })
    };
    html! {
        <select class="input" disabled={props.disabled} {onchange}>
            {for props.options.iter().map(|(value, label)| html! {
                <option value={value.clone()} selected={*value == props.value}>
                    {label.clone()}
                </option>
            })}
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RangeInputProps {
    pub label: AttrValue,
    pub value: u32,
    pub min: u32,
    pub max: u32,
    #[prop_or(1)]
    pub step: u32,
    pub on_change: Callback<u32>,
}

#[function_component(RangeInput)]
pub(crate) fn range_input(props: &RangeInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u32>() {
                on_change.emit(value);
            }
        })
    };
    html! {
        <div class="range-field">
            <div class="range-head">
                <span class="muted">{props.label.clone()}</span>
                <span class="range-value">{props.value}</span>
            </div>
            <input
                class="range"
                type="range"
                min={props.min.to_string()}
                max={props.max.to_string()}
                step={props.step.to_string()}
                value={props.value.to_string()}
                {oninput}
            />
        </div>
    }
}
