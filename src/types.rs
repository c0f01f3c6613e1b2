/// Direction of the most recent viewport height change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeightDirection {
    /// The viewport grew; assumption is that the address bar is hiding.
    Up,
    /// The viewport shrank; assumption is that the address bar is showing.
    Down,
}

/// The two-state address-bar classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Phase of the one-time bootstrap detection sequence.
///
/// `NotStarted → init() → {WaitingForDocument | Ready} → detect() → Perturbed
/// → (restore delay elapses in `poll`) → Settled`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BootstrapPhase {
    NotStarted,
    /// `init` ran before the host document was ready; `detect` is deferred
    /// until the adapter reports `document_loaded`.
    WaitingForDocument,
    Ready,
    /// The perturbing scroll has been issued; the restore is pending.
    Perturbed,
    /// The restore has run; scroll position and container height are back to
    /// their original values.
    Settled,
}
