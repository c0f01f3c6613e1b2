use crate::HeightState;

/// Capabilities a rendering host must provide to a [`crate::Detector`].
///
/// The detector never touches a page directly. An adapter implements this
/// trait over its real surface (DOM, webview bridge, or a simulation in
/// tests) and forwards scroll signals to [`crate::Detector::on_scroll`].
///
/// All methods are assumed infallible: the only "I/O" behind them is
/// synchronous page reads/writes that the host either performs or simulates.
pub trait ViewportHost {
    /// Creates and attaches the measuring probe to the page container.
    ///
    /// The probe must stretch to 100% of the container's height, have zero
    /// width, and be excluded from hit-testing and visibility, so it samples
    /// the true rendered viewport height without any layout side effects.
    /// Called at most once per detector.
    fn insert_probe(&mut self);

    /// Current rendered height of the probe, in device pixels.
    fn probe_height(&self) -> u32;

    /// Adds a named marker to the page container. Applying a marker that is
    /// already present is a no-op (class-list semantics).
    fn apply_marker(&mut self, marker: &str);

    /// Removes a named marker from the page container. Removing an absent
    /// marker is a no-op.
    fn remove_marker(&mut self, marker: &str);

    /// Current scroll position of the page.
    fn scroll_position(&self) -> u64;

    /// Programmatically scrolls the page. The host is expected to deliver the
    /// resulting scroll signal back to the detector like any user scroll.
    fn set_scroll_position(&mut self, position: u64);

    /// Stretches the page container beyond the viewport (e.g. to 200% of the
    /// viewport height) so that a scroll is physically possible even on short
    /// pages. The host remembers the previous height for
    /// [`ViewportHost::restore_scrollable`].
    fn force_scrollable(&mut self);

    /// Undoes [`ViewportHost::force_scrollable`], restoring the container's
    /// original height.
    fn restore_scrollable(&mut self);

    /// Whether the host document has finished loading enough to be scrolled.
    fn document_ready(&self) -> bool;

    /// Dispatches the height-change notification to consumers. The payload is
    /// a snapshot; the detector will not mutate it afterwards.
    fn dispatch_height_change(&mut self, state: HeightState);

    /// Dispatches a generic, payload-less resize notification. Only called
    /// when [`crate::DetectorOptions::fire_resize`] is set.
    fn dispatch_resize(&mut self);
}
