//! Form builder: edits one form definition for the admin.
//!
//! Responsibilities
//! - Wrap a `FormBuilder` loaded from the catalog on mount, with the fixed
//!   applicant field injected first when an older definition lacks it.
//! - Track unsaved changes by MD5 of the serialized definition and mirror the
//!   result into the page's `app_dirty` flag.
//! - On save, validate locally and hand the definition to the parent, which
//!   persists it and leaves the builder on success.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FormBuilderProps;
pub use state::FormBuilderComponent;

impl Component for FormBuilderComponent {
    type Message = Msg;
    type Properties = FormBuilderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        FormBuilderComponent::new(&props.form_id, &props.catalog)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
