use common::model::form::FormDefinition;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RequestFormProps {
    /// The form to fill in. `None` when the requested id is not in the catalog,
    /// which renders a not-found message.
    pub form: Option<FormDefinition>,
    pub on_back: Callback<()>,
}
