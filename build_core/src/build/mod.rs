//! Build session - selection state and the queries derived from it

mod selection;
mod session;
mod summary;

pub use selection::Selection;
pub use session::CharacterBuild;
pub use summary::{BuildSummary, EquippedItem};
