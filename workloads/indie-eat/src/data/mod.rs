//! Page content and UI state types.

mod content;
mod toast;

pub use content::*;
pub use toast::*;
