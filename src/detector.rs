use crate::{
    BootstrapPhase, DetectError, DetectorOptions, HeightState, HeightTracker, ViewportHost,
    Visibility,
};

/// The pending rollback of a bootstrap perturbation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingRestore {
    scroll_position: u64,
    due_ms: u64,
}

/// A headless address-bar visibility detector.
///
/// This type is intentionally host-agnostic:
/// - It does not hold any page objects; all page access goes through a
///   [`ViewportHost`] passed into each call.
/// - Your adapter drives it by forwarding scroll signals to
///   [`Detector::on_scroll`] and by ticking [`Detector::poll`].
/// - Each detector owns its own state; multiple independent detectors are
///   fine.
///
/// Typical wiring:
/// 1. `init(host, now_ms)` once at startup (or `document_loaded` later).
/// 2. `on_scroll(host)` for every scroll signal the host delivers.
/// 3. `poll(host, now_ms)` on the adapter's timer tick until the bootstrap
///    restore has settled.
#[derive(Clone, Debug)]
pub struct Detector {
    options: DetectorOptions,
    tracker: HeightTracker,
    probe_rendered: bool,
    phase: BootstrapPhase,
    pending_restore: Option<PendingRestore>,
}

impl Detector {
    pub fn new(options: DetectorOptions) -> Self {
        adebug!(
            enabled = options.enabled,
            fire_resize = options.fire_resize,
            "Detector::new"
        );
        Self {
            options,
            tracker: HeightTracker::new(),
            probe_rendered: false,
            phase: BootstrapPhase::NotStarted,
            pending_restore: None,
        }
    }

    pub fn options(&self) -> &DetectorOptions {
        &self.options
    }

    /// Snapshot of the tracked heights.
    pub fn state(&self) -> HeightState {
        self.tracker.state()
    }

    /// Current classification, recomputed from the tracked heights.
    pub fn visibility(&self) -> Visibility {
        self.tracker.state().visibility()
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    /// Flips the master switch at runtime.
    ///
    /// Disabling does not cancel a pending bootstrap restore: once `detect`
    /// has perturbed the page, the restore runs to completion.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        adebug!(enabled, "Detector::set_enabled");
    }

    pub fn probe_rendered(&self) -> bool {
        self.probe_rendered
    }

    pub fn bootstrap_phase(&self) -> BootstrapPhase {
        self.phase
    }

    /// The entry point for host scroll signals.
    ///
    /// No-op while disabled. Otherwise renders the probe (once), samples it,
    /// and fires the classifier only when the height actually changed:
    /// arbitrarily many scroll signals collapse to at most one notification
    /// per distinct height value.
    pub fn on_scroll(&mut self, host: &mut impl ViewportHost) {
        if !self.options.enabled {
            return;
        }

        self.render_probe(host);

        let sample = host.probe_height();
        let changed = self.tracker.update(sample);
        atrace!(sample, changed, "Detector::on_scroll");

        if changed {
            self.trigger(host);
        }
    }

    fn render_probe(&mut self, host: &mut impl ViewportHost) {
        if self.probe_rendered {
            return;
        }
        self.probe_rendered = true;

        // Until a measurement says otherwise, the address bar is visible.
        host.apply_marker(&self.options.visible_marker);
        host.insert_probe();
        adebug!("probe rendered");
    }

    /// Classifies the current state, swaps the container markers, and
    /// dispatches notifications.
    fn trigger(&mut self, host: &mut impl ViewportHost) {
        let state = self.tracker.state();

        match state.visibility() {
            Visibility::Hidden => {
                host.apply_marker(&self.options.hidden_marker);
                host.remove_marker(&self.options.visible_marker);
            }
            Visibility::Visible => {
                host.remove_marker(&self.options.hidden_marker);
                host.apply_marker(&self.options.visible_marker);
            }
        }

        host.dispatch_height_change(state);
        if self.options.fire_resize {
            host.dispatch_resize();
        }
    }

    /// Starts bootstrap detection.
    ///
    /// Runs [`Detector::detect`] synchronously when the host document is
    /// ready; otherwise defers it until the adapter calls
    /// [`Detector::document_loaded`]. Re-running `init` after the bootstrap
    /// has settled perturbs the page again; guard against double-binding on
    /// the adapter side if that is not wanted.
    pub fn init(
        &mut self,
        host: &mut impl ViewportHost,
        now_ms: u64,
    ) -> Result<(), DetectError> {
        if host.document_ready() {
            self.phase = BootstrapPhase::Ready;
            self.detect(host, now_ms)
        } else {
            self.phase = BootstrapPhase::WaitingForDocument;
            adebug!("init deferred until document load");
            Ok(())
        }
    }

    /// Call this when the host document finishes loading.
    ///
    /// Runs the deferred `detect` exactly once; a no-op unless a prior
    /// [`Detector::init`] is waiting for the document.
    pub fn document_loaded(
        &mut self,
        host: &mut impl ViewportHost,
        now_ms: u64,
    ) -> Result<(), DetectError> {
        if self.phase != BootstrapPhase::WaitingForDocument {
            return Ok(());
        }
        self.phase = BootstrapPhase::Ready;
        self.detect(host, now_ms)
    }

    /// Perturbs the page so the host recomputes its chrome visibility and
    /// emits at least one scroll signal, giving the first real measurement an
    /// accurate value.
    ///
    /// The perturbation is two-phase by construction: the container is forced
    /// scrollable and scrolled by one unit now; scroll position and container
    /// height are restored by [`Detector::poll`] once `restore_delay_ms` has
    /// elapsed. It must not be collapsed into a single synchronous step,
    /// because the accurate reading requires the scroll signal to actually be
    /// delivered in between.
    ///
    /// Returns [`DetectError::Disabled`] when the master switch is off.
    pub fn detect(
        &mut self,
        host: &mut impl ViewportHost,
        now_ms: u64,
    ) -> Result<(), DetectError> {
        if !self.options.enabled {
            return Err(DetectError::Disabled);
        }
        if self.pending_restore.is_some() {
            awarn!("detect called while a restore is pending; ignored");
            return Ok(());
        }

        // Make sure the page can physically scroll, even when shorter than
        // the viewport.
        host.force_scrollable();

        let scroll_position = host.scroll_position();
        host.set_scroll_position(scroll_position.saturating_add(1));

        self.pending_restore = Some(PendingRestore {
            scroll_position,
            due_ms: now_ms.saturating_add(self.options.restore_delay_ms),
        });
        self.phase = BootstrapPhase::Perturbed;
        adebug!(scroll_position, now_ms, "bootstrap perturbation issued");
        Ok(())
    }

    /// Advances the deferred bootstrap restore.
    ///
    /// Call this from the adapter's timer tick. Once `now_ms` reaches the
    /// restore deadline, the original scroll position and container height
    /// are put back and the bootstrap settles. No-op otherwise. Dropping the
    /// detector before the deadline cancels the restore.
    pub fn poll(&mut self, host: &mut impl ViewportHost, now_ms: u64) {
        let Some(pending) = self.pending_restore else {
            return;
        };
        if now_ms < pending.due_ms {
            return;
        }

        host.set_scroll_position(pending.scroll_position);
        host.restore_scrollable();
        self.pending_restore = None;
        self.phase = BootstrapPhase::Settled;
        adebug!(now_ms, "bootstrap perturbation restored");
    }
}
