//! Editor-Zustand, Undo/Redo-History und Use-Cases (Mutations-Engine).

pub mod history;
pub mod state;
pub mod use_cases;

pub use history::{DotStyleAttrs, EditCommand, EditHistory, EntityMeta};
pub use state::{Draft, EditorState, PresetStyle, SelectionState};
