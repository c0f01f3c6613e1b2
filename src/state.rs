use crate::{HeightDirection, Visibility};

/// A lightweight, serializable snapshot of the tracked viewport heights.
///
/// This is the payload carried by height-change notifications. It is `Copy`:
/// consumers always receive a snapshot taken at dispatch time, never a live
/// reference into the detector.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightState {
    /// Last observed probe height.
    pub height: u32,
    /// Smallest height observed since reset.
    pub min: u32,
    /// Largest height observed since reset.
    pub max: u32,
    /// `max - min`: the height currently attributed to the address bar.
    pub offset: u32,
    /// Direction of the most recent height change. Holds its last value on
    /// samples where the height did not change.
    pub dir: Option<HeightDirection>,
    /// Whether at least one sample has been observed. This is an explicit
    /// flag so that a genuine first measurement of zero is distinguishable
    /// from "never measured".
    pub initialized: bool,
}

impl HeightState {
    /// Classifies address-bar visibility from the current heights.
    ///
    /// The bar is hidden iff the viewport sits at its largest observed
    /// height. This is level-triggered: it is recomputed fresh from the
    /// current state, not from a transition table. Before the first sample
    /// the bar is assumed visible.
    pub fn visibility(&self) -> Visibility {
        if self.initialized && self.height == self.max {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }
}
