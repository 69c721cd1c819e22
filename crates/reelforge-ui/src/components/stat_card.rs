use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StatCardProps {
    pub title: AttrValue,
    pub value: Html,
    #[prop_or_default]
    pub delta: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Option<Html>,
}

#[function_component(StatCard)]
pub(crate) fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat-card">
            <div class="stat-head">
                <span class="muted">{props.title.clone()}</span>
                {props.icon.clone().unwrap_or_default()}
            </div>
            <div class="stat-value">{props.value.clone()}</div>
            {props.delta.clone().map_or_else(Html::default, |delta| html! {
                <div class="stat-delta muted">{delta}</div>
            })}
        </div>
    }
}
