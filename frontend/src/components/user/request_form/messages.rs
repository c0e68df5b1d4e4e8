use common::requests::DispatchReport;

pub enum Msg {
    SetValue { field_id: String, value: String },
    Submit,
    Delivered(DispatchReport),
    Failed(String),
}
