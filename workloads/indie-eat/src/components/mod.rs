//! Components shared across sections.

mod cart_drawer;
mod icon;
mod nav;
mod toast;

pub use cart_drawer::*;
pub use icon::*;
pub use nav::*;
pub use toast::*;
