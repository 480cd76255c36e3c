// Section List Model — the ordered, uniquely-keyed list of content blocks a
// portfolio page renders. Owns reorder and show/hide semantics; every design
// consumes it, the editable design also drives its two mutation operations.

pub mod list;
pub mod model;

pub use list::{MoveDirection, SectionEdit, SectionList};
pub use model::{Section, SectionData, SectionKey};
