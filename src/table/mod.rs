//! Table collaborator seam
//!
//! Only a `TableView` adapter touches rendering; the dispatcher and the
//! loading helpers work exclusively through the trait.

mod memory;
mod traits;

pub use memory::MemoryTable;
pub use traits::TableView;
