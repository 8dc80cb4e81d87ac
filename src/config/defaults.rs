// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default timings
//! and thresholds used by the UI components. Constants are organized by
//! category.

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Page identifier that requires a sticky action bar.
pub const DEFAULT_SETUP_PAGE: &str = "setup";

/// Page identifier on which form input is auto-saved.
pub const DEFAULT_AUTOSAVE_PAGE: &str = "setup";

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Time a toast stays up before it starts hiding (milliseconds).
pub const DEFAULT_TOAST_TIMEOUT_MS: u64 = 3000;

/// Delay between toast creation and the visible class (milliseconds).
pub const DEFAULT_TOAST_SHOW_DELAY_MS: u64 = 10;

/// Fade-out time before a hidden toast is detached (milliseconds).
pub const DEFAULT_TOAST_FADE_MS: u64 = 300;

// ==========================================================================
// Modal Defaults
// ==========================================================================

/// Delay between modal creation and the open class (milliseconds).
pub const DEFAULT_MODAL_OPEN_DELAY_MS: u64 = 10;

/// Close animation time before the overlay is detached (milliseconds).
pub const DEFAULT_MODAL_CLOSE_DELAY_MS: u64 = 300;

// ==========================================================================
// Sticky Bar Defaults
// ==========================================================================

/// Vertical scroll offset past which the fallback marks the bar stuck.
pub const DEFAULT_STICKY_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Intersection ratio the bar must reach to count as not stuck.
pub const STICKY_VISIBILITY_THRESHOLD: f64 = 1.0;

// ==========================================================================
// Auto-save Defaults
// ==========================================================================

/// Debounce window for auto-save (milliseconds).
pub const DEFAULT_AUTOSAVE_DEBOUNCE_MS: u64 = 5000;

// ==========================================================================
// Action Button Defaults
// ==========================================================================

/// Duration of the simulated save behind an action button (milliseconds).
pub const DEFAULT_ACTION_DELAY_MS: u64 = 1200;

// ==========================================================================
// Progress Bar Defaults
// ==========================================================================

/// Default progress animation duration (milliseconds).
pub const DEFAULT_PROGRESS_DURATION_MS: u64 = 1000;

/// Animation frame cadence (milliseconds, ~60 fps).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Minimum frame interval accepted from configuration.
pub const MIN_FRAME_INTERVAL_MS: u64 = 1;
