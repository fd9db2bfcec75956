// ABOUTME: The editable-field pattern shared by every dashboard panel
// One state machine implemented once, parameterized by validation, instantiated per field.

pub mod editor;
pub mod list;
pub mod logo;
pub mod validate;

pub use editor::{FieldEditor, PanelPhase, Validator};
pub use list::ListEditor;
pub use logo::LogoPanel;
