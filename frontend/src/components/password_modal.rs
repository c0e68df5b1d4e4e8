//! Admin password prompt.
//!
//! The typed password lives in this component only. The parent owns the
//! check and passes the error back down; closing unmounts the component, so a
//! reopened prompt always starts empty.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PasswordModalProps {
    #[prop_or_default]
    pub error: Option<String>,
    pub on_close: Callback<()>,
    pub on_submit: Callback<String>,
}

pub enum Msg {
    Input(String),
    Submit,
    Close,
}

pub struct PasswordModal {
    password: String,
    input_ref: NodeRef,
}

impl Component for PasswordModal {
    type Message = Msg;
    type Properties = PasswordModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            password: String::new(),
            input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                ctx.props().on_submit.emit(self.password.clone());
                false
            }
            Msg::Close => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput = link.callback(|e: InputEvent| {
            Msg::Input(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onkeypress = link.batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(Msg::Submit)
        });

        html! {
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-body">
                        <h3>{"관리자 접근"}</h3>
                        <p class="modal-hint">{"계속하려면 비밀번호를 입력하세요."}</p>
                        <input
                            type="password"
                            class="input"
                            ref={self.input_ref.clone()}
                            {oninput}
                            {onkeypress}
                        />
                        if let Some(error) = &ctx.props().error {
                            <p class="field-error">{ error }</p>
                        }
                    </div>
                    <div class="modal-actions">
                        <button class="btn" onclick={link.callback(|_| Msg::Close)}>{"취소"}</button>
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::Submit)}>
                            {"확인"}
                        </button>
                    </div>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                input.focus().ok();
            }
        }
    }
}
