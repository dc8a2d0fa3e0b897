//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` by default.
//! Every read site is additionally gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit how long each resource took to resolve.
    pub print_fetch_timings: bool,
    /// Emit page mount/unmount and discarded (stale) fetch results.
    pub print_page_lifecycle: bool,
    /// Emit threshold controller state transitions.
    pub print_threshold_transitions: bool,
    /// Emit UI interaction logs (navigation, manual actions).
    pub print_ui_interactions: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_fetch_timings: false,
    print_page_lifecycle: true,
    print_threshold_transitions: true,
    print_ui_interactions: true,
    print_state_serde: false,
    print_shutdown: false,
};
