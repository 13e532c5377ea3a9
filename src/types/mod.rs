//! Data types for the grid core.

mod policy;
mod selection;
mod table;
mod view;

pub use policy::*;
pub use selection::*;
pub use table::*;
pub use view::*;
