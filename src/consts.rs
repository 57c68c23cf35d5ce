//! Shared timing and geometry constants for the page behaviors.
//!
//! Most of these are defaults behind [`crate::config::SiteConfig`] and can be
//! overridden per page. Markup ids, form length limits and the pull-hint and
//! reveal-on-scroll geometry are used directly.

// ── Gallery ─────────────────────────────────────────────────────

/// Selection value meaning "show every card".
pub const WILDCARD_CATEGORY: &str = "all";

/// Delay between consecutive card reveals, in milliseconds.
pub const REVEAL_STAGGER_MS: u64 = 100;

/// Delay before the empty-state check runs after a filter change, in milliseconds.
pub const REVEAL_SETTLE_MS: u64 = 300;

/// Haptic pulse emitted on filter selection, in milliseconds.
pub const FILTER_HAPTIC_MS: u64 = 30;

/// DOM id of the empty-state placeholder.
pub const PLACEHOLDER_ID: &str = "no-results";
/// Container the cards and the placeholder live in.
pub const GALLERY_GRID_ID: &str = "projects-grid";

pub const PLACEHOLDER_TITLE: &str = "No projects found";

pub const PLACEHOLDER_BODY: &str = "Try selecting a different category to see more projects.";

// ── Navigation ──────────────────────────────────────────────────

/// Haptic pulse emitted when the mobile menu toggles, in milliseconds.
pub const MENU_HAPTIC_MS: u64 = 50;

/// Minimum leftward swipe across the open menu that closes it, in pixels.
pub const MENU_SWIPE_CLOSE_PX: f64 = 50.0;

/// Header clearance when jumping to an anchor on pointer devices.
pub const ANCHOR_OFFSET_PX: f64 = 80.0;

/// Header clearance when jumping to an anchor on touch devices.
pub const TOUCH_ANCHOR_OFFSET_PX: f64 = 60.0;

/// How far above a section's top the scroll spy starts treating it as current.
pub const SCROLL_SPY_OFFSET_PX: f64 = 100.0;

/// Debounce window for scroll spy updates (~60fps).
pub const SCROLL_SPY_DEBOUNCE_MS: u64 = 16;

/// Pull distance at the top of the page before the refresh hint moves the body.
pub const PULL_HINT_THRESHOLD_PX: f64 = 80.0;

/// Maximum body translation shown by the refresh hint.
pub const PULL_HINT_MAX_PX: f64 = 20.0;

/// Visibility ratio at which `.reveal` elements activate.
pub const REVEAL_ON_SCROLL_THRESHOLD: f64 = 0.1;

pub const REVEAL_ON_SCROLL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Theme ───────────────────────────────────────────────────────

/// Storage key holding the persisted theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Duration of the toggle button's spin animation, in milliseconds.
pub const THEME_SPIN_MS: u64 = 300;

// ── Contact form ────────────────────────────────────────────────

/// Simulated network latency of a form submission, in milliseconds.
pub const SUBMIT_LATENCY_MS: u64 = 1500;

/// Probability that a simulated submission succeeds.
pub const SUBMIT_SUCCESS_RATE: f64 = 0.9;

/// How long the success panel stays up before the form resets, in milliseconds.
pub const SUBMIT_RESET_MS: u64 = 5000;

pub const MIN_NAME_CHARS: usize = 2;

pub const MIN_MESSAGE_CHARS: usize = 10;
