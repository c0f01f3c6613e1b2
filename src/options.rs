use alloc::borrow::Cow;

/// Configuration for [`crate::Detector`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectorOptions {
    /// Master switch. When `false`, scroll signals are ignored and bootstrap
    /// detection refuses to run.
    pub enabled: bool,

    /// Whether a payload-less resize notification accompanies each
    /// height-change notification.
    pub fire_resize: bool,

    /// Marker applied to the page container while the address bar is
    /// classified as visible.
    pub visible_marker: Cow<'static, str>,
    /// Marker applied to the page container while the address bar is
    /// classified as hidden. Mutually exclusive with `visible_marker`.
    pub hidden_marker: Cow<'static, str>,

    /// Delay before the bootstrap perturbation is rolled back, in
    /// milliseconds. Short enough to be imperceptible, long enough for the
    /// host to deliver the perturbing scroll signal first.
    pub restore_delay_ms: u64,
}

impl DetectorOptions {
    pub fn new() -> Self {
        Self {
            enabled: true,
            fire_resize: false,
            visible_marker: Cow::Borrowed("mobile-addressbar--visible"),
            hidden_marker: Cow::Borrowed("mobile-addressbar--hidden"),
            restore_delay_ms: 2,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_fire_resize(mut self, fire_resize: bool) -> Self {
        self.fire_resize = fire_resize;
        self
    }

    pub fn with_markers(
        mut self,
        visible_marker: impl Into<Cow<'static, str>>,
        hidden_marker: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.visible_marker = visible_marker.into();
        self.hidden_marker = hidden_marker.into();
        self
    }

    pub fn with_restore_delay_ms(mut self, delay_ms: u64) -> Self {
        self.restore_delay_ms = delay_ms;
        self
    }
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self::new()
    }
}
