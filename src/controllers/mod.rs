mod menu;
pub mod value_editor;

pub use menu::{ExposureController, Screen};
pub use value_editor::{EditorResult, ValueEditorU8, ValueEditorU16};
