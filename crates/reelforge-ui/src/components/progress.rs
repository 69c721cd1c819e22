use crate::core::logic::clamp_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ProgressBarProps {
    pub value: u8,
}

#[function_component(ProgressBar)]
pub(crate) fn progress_bar(props: &ProgressBarProps) -> Html {
    let width = clamp_percent(usize::from(props.value));
    html! {
        <div class="progress-track">
            <div class="progress-fill" style={format!("width:{width}%")} />
        </div>
    }
}
