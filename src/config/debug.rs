//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit which column was picked as the date column and how many rows survived.
    pub print_normalization: bool,
    /// Emit the outcome of every column-role rule.
    pub print_role_inference: bool,
    /// Emit upload slot changes (paths typed, files dropped, files cleared).
    pub print_ui_interactions: bool,
    /// Emit a one-line summary at the end of every render pass.
    pub print_render_pass: bool,
    /// Emit chart bounds whenever the plot is rebuilt.
    pub print_plot_bounds: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_normalization: false,
    print_role_inference: false,
    print_ui_interactions: true,
    print_render_pass: true,
    print_plot_bounds: false,
};
