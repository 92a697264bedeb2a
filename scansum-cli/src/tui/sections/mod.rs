//! One module per screen section.  Each exposes `render` and `footer_hints`.

pub mod error;
pub mod home;
pub mod loading;
pub mod preview;
pub mod results;
