//! Request view: one user filling in one form and sending it.
//!
//! Responsibilities
//! - Render every field of the form with its widget and inline error.
//! - Hold the `SubmissionSession` for as long as the view is mounted; leaving
//!   the view drops it, which is the only way to submit the same form again.
//! - Post valid values to the submission relay and reflect the chat webhook's
//!   outcome in the submit button and status line.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RequestFormProps;
pub use state::RequestFormComponent;

impl Component for RequestFormComponent {
    type Message = Msg;
    type Properties = RequestFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RequestFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
