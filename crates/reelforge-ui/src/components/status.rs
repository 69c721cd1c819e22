use crate::core::logic::status_tone;
use crate::models::RunStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StatusPillProps {
    pub status: RunStatus,
}

#[function_component(StatusPill)]
pub(crate) fn status_pill(props: &StatusPillProps) -> Html {
    html! {
        <span class={classes!("pill", status_tone(props.status))}>{props.status.label()}</span>
    }
}
