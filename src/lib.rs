//! # folio
//!
//! Client-side behavior for a single-page portfolio: a category-filtered
//! project gallery with staggered reveal animations, a mobile navigation
//! menu, scroll-driven nav highlighting, a persisted light/dark theme and a
//! validated contact form with a simulated submission.
//!
//! The crate compiles natively without the `csr` feature so the logic can be
//! tested headlessly. With `csr` it builds to WebAssembly and binds itself to
//! the page markup on start.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`gallery`] | Card registry, filter controller, reveal scheduler, empty-state reconciler |
//! | [`site`] | Mobile menu, scroll spy, theme preference, contact form |
//! | [`config`] | Page configuration with defaults |
//! | [`consts`] | Shared timing and geometry constants |
//! | [`error`] | Bootstrapping errors |
//! | `dom` | web-sys bindings (`csr` feature only) |

pub mod config;
pub mod consts;
pub mod error;
pub mod gallery;
pub mod site;

#[cfg(feature = "csr")]
pub mod dom;

pub use error::Error;

/// WASM entry point: bind every page behavior to the current document.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    dom::boot();
}
