//! Shelf Tab Sequences
//!
//! A window's tab strip is an ordered, duplicate-free sequence of tabs that
//! never becomes empty. The only two mutations a drag gesture may commit are
//! a move (reorder) and a detach (hand the tab over to a new window); both
//! live in [`CommitExecutor`] and are applied as one atomic step.

mod commit;
mod error;
mod geometry;
mod sequence;
mod tab;

pub use commit::{CommitExecutor, DetachDirective};
pub use error::TabError;
pub use geometry::{Frame, Point, Size};
pub use sequence::TabSequence;
pub use tab::{Tab, TabId};

pub type Result<T> = std::result::Result<T, TabError>;
