//! Page sections, top to bottom.

mod contacts;
mod delivery;
mod footer;
mod hero;
mod menu;

pub use contacts::*;
pub use delivery::*;
pub use footer::*;
pub use hero::*;
pub use menu::*;
