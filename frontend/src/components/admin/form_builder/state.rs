use common::builder::FormBuilder;
use common::catalog::FormCatalog;

use crate::helpers::form_md5;

pub struct FormBuilderComponent {
    pub builder: FormBuilder,

    /// MD5 of the definition as loaded. Used for dirty tracking.
    pub original_md5: String,
}

impl FormBuilderComponent {
    pub fn new(form_id: &str, catalog: &FormCatalog) -> Self {
        let builder = FormBuilder::load(form_id, catalog);
        let original_md5 = form_md5(builder.form());
        Self {
            builder,
            original_md5,
        }
    }

    pub fn is_dirty(&self) -> bool {
        form_md5(self.builder.form()) != self.original_md5
    }
}
