use crate::components::status::StatusPill;
use crate::models::RunRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ActivityTimelineProps {
    pub items: Vec<RunRecord>,
    pub on_select: Callback<u64>,
}

#[function_component(ActivityTimeline)]
pub(crate) fn activity_timeline(props: &ActivityTimelineProps) -> Html {
    if props.items.is_empty() {
        return html! { <p class="muted">{"No runs yet."}</p> };
    }
    html! {
        <ol class="timeline">
            {for props.items.iter().map(|item| {
                let on_select = {
                    let on_select = props.on_select.clone();
                    let id = item.id;
                    Callback::from(move |_| on_select.emit(id))
                };
                html! {
                    <li class="timeline-item" key={item.id.to_string()}>
                        <span class="timeline-dot" />
                        <div class="timeline-meta">
                            <span class="muted">{item.time.clone()}</span>
                            <StatusPill status={item.status} />
                        </div>
                        <button class="ghost timeline-title" onclick={on_select}>
                            {item.title.clone()}
                        </button>
                    </li>
                }
            })}
        </ol>
    }
}
