//! Project gallery filtering engine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is browser-independent. The `dom` layer supplies a
//! [`surface::Surface`] backed by real elements and a [`timers::Scheduler`]
//! backed by `setTimeout`; tests use [`surface::MemorySurface`] and
//! [`timers::VirtualTimers`] instead.

pub mod filter;
pub mod placeholder;
pub mod registry;
pub mod reveal;
pub mod surface;
pub mod timers;

pub use filter::{CategorySelection, FilterController, FilterState, Partition, TaskOutcome};
pub use placeholder::{EmptyStateReconciler, Placeholder, PlaceholderChange};
pub use registry::{CardRegistry, DisplayItem, ItemId};
pub use reveal::{Generation, RevealScheduler, RevealTask, SettlePolicy};
pub use surface::{MemorySurface, Surface, VisualState};
pub use timers::{Scheduler, VirtualTimers};
