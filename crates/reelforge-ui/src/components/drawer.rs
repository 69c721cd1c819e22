use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DrawerProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Drawer)]
pub(crate) fn drawer(props: &DrawerProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    html! {
        <div class={classes!("drawer", props.open.then_some("open"))}>
            <div class="drawer-backdrop" onclick={on_backdrop} />
            <aside class="drawer-panel glass">
                <header class="drawer-head">
                    <h3>{props.title.clone().unwrap_or_default()}</h3>
                    <button class="ghost" onclick={on_close_click}>{"Close"}</button>
                </header>
                <div class="drawer-body">{for props.children.iter()}</div>
            </aside>
        </div>
    }
}
