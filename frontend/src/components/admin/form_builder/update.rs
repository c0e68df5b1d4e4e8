use yew::prelude::*;

use super::messages::Msg;
use super::state::FormBuilderComponent;
use crate::helpers::{set_window_dirty_flag, show_toast};

pub fn update(
    component: &mut FormBuilderComponent,
    ctx: &Context<FormBuilderComponent>,
    msg: Msg,
) -> bool {
    let changed = match msg {
        Msg::SetName(name) => {
            component.builder.set_name(name);
            true
        }
        Msg::SetDescription(description) => {
            component.builder.set_description(description);
            true
        }
        Msg::SetHandlers(handlers) => {
            component.builder.set_handlers(&handlers);
            true
        }
        Msg::AddField => {
            component.builder.add_field();
            true
        }
        Msg::UpdateField { field_id, change } => component.builder.update_field(&field_id, change),
        Msg::RemoveField(field_id) => component.builder.remove_field(&field_id),
        Msg::Save => {
            match component.builder.save() {
                Ok(form) => ctx.props().on_save.emit(form),
                Err(err) => show_toast(&err.to_string()),
            }
            return false;
        }
    };

    if changed {
        set_window_dirty_flag(component.is_dirty());
    }
    changed
}
