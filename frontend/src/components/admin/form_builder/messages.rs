use common::builder::FieldChange;

pub enum Msg {
    SetName(String),
    SetDescription(String),
    SetHandlers(String),
    AddField,
    UpdateField { field_id: String, change: FieldChange },
    RemoveField(String),
    Save,
}
