use form::FormState;

use crate::contact::ContactPayload;

/// Application state shared by all components.
///
/// `form` holds the live editing buffers and validation errors; `payload`
/// is the last successfully submitted contact (empty strings before the
/// first submission, matching what the payload panel should echo).
#[derive(Default)]
pub struct State {
    pub form: FormState,
    pub payload: ContactPayload,
}
