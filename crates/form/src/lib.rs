//! Declarative form model shared by the intake TUI.
//!
//! The pieces are deliberately split the same way they are consumed:
//! - `field` / `schema`: pure data describing what a form looks like
//! - `state`: the mutable values and validation errors while editing
//! - `validate`: reusable validator closures (required / email / phone)
//! - `mask`: live input masks applied on every keystroke
//!
//! Nothing in here knows about terminals or rendering.

mod field;
mod mask;
mod schema;
mod state;
pub mod validate;

pub use field::{FieldKind, FormField};
pub use mask::mask_phone;
pub use schema::FormSchema;
pub use state::FormState;
