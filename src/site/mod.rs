//! Page behaviors around the gallery: navigation, scrolling, theme and the
//! contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module is an independent state holder or pure helper with no shared
//! mutable state; the `dom` layer wires them to listeners.

pub mod contact;
pub mod nav;
pub mod scroll;
pub mod theme;
