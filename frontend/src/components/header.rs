use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    /// Whether an admin view is showing, which decides the highlighted entry.
    pub admin_active: bool,
    pub on_user_portal: Callback<()>,
    pub on_admin: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_user_portal = props.on_user_portal.reform(|_: MouseEvent| ());
    let on_admin = props.on_admin.reform(|_: MouseEvent| ());

    html! {
        <header class="app-header">
            <div class="app-title">{"서울아레나 업무요청"}</div>
            <nav class="app-nav">
                <button
                    class={classes!("nav-btn", (!props.admin_active).then_some("active"))}
                    onclick={on_user_portal}
                >
                    {"사용자 포털"}
                </button>
                <button
                    class={classes!("nav-btn", props.admin_active.then_some("active"))}
                    onclick={on_admin}
                >
                    {"관리자"}
                </button>
            </nav>
        </header>
    }
}
