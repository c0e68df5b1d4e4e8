//! Everything that happens between a user filling in a form and the two
//! webhooks receiving it: the entered values, required-field validation, the
//! payloads sent to each destination, and the per-session status machine.

pub mod payload;
pub mod session;
pub mod validation;
pub mod values;

pub use payload::{build_primary_payload, build_sheet_payload, PrimaryPayload, SheetPayload};
pub use session::{SubmissionSession, SubmissionStatus, SubmitBlocked};
pub use validation::{validate, ValidationErrors};
pub use values::SubmissionValues;
