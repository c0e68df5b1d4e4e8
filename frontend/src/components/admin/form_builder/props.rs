use common::catalog::FormCatalog;
use common::model::form::FormDefinition;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FormBuilderProps {
    /// Id being edited. An id missing from `catalog` starts a new form.
    pub form_id: String,
    pub catalog: FormCatalog,
    /// Receives a definition that passed local validation.
    pub on_save: Callback<FormDefinition>,
    pub on_back: Callback<()>,
}
