//! Use-Cases: je Modul eine benutzerseitige Edit-Operation.
//!
//! Jede Funktion nimmt `&mut EditorState`, läuft synchron bis zum Ende und
//! ist atomar: entweder voller Erfolg (Modell aktualisiert, Invarianten
//! intakt, genau ein Undo-Command) oder Fehler ohne jede Änderung.

pub mod attributes;
pub mod create_point;
pub mod delete_dot;
pub mod delete_entity;
pub mod draft;
pub mod history_ops;
pub mod insert_dot;
pub mod move_dot;
pub mod pick;
pub mod select;

pub use attributes::{set_dot_style, set_entity_meta};
pub use create_point::create_point;
pub use delete_dot::delete_dot;
pub use delete_entity::delete_entity;
pub use draft::{append_draft_dot, begin_draft, cancel_draft, finalize_draft};
pub use history_ops::{redo, undo};
pub use insert_dot::insert_dot_after;
pub use move_dot::{begin_drag, end_drag, move_dot};
pub use pick::{hit_test, Hit, PickTolerance, DOT_GRAB_RADIUS_PX, SEGMENT_GRAB_RADIUS_PX};
pub use select::{clear_selection, select_hit};
