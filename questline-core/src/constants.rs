//! Fixed values shared by every Questline front-end.
//!
//! The demo runs for a single hard-wired customer against a local backend, so
//! the identifiers and user-facing fallback copy are kept here rather than in
//! any external asset.

/// Customer id used for every request in the single-user demo.
pub const DEMO_USER_ID: &str = "000000006";

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

// Wire sentinels -----------------------------------------------------------
pub(crate) const NO_TREATMENT: &str = "0";
pub(crate) const NO_PREDICTION: &str = "null";

// User-facing copy ---------------------------------------------------------
pub const NO_PROMO_LABEL: &str = "No promo";
pub const MSG_CONTEXT_FAILED: &str = "Failed to load user context";
pub const MSG_GENERATE_FAILED: &str = "Failed to generate quest";
pub const MSG_COMPLETE_FAILED: &str = "Failed to complete task";

pub(crate) const SECONDS_PER_DAY: i64 = 60 * 60 * 24;
