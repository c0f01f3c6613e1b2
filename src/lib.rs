//! A headless mobile address-bar visibility detector.
//!
//! Mobile browsers resize the visible viewport when the address bar (URL bar)
//! auto-hides or reappears on scroll. This crate tracks those height changes
//! and classifies the bar as visible or hidden, without any device or browser
//! detection: it only reacts to observed height deltas.
//!
//! It is host-agnostic. A rendering adapter (DOM, webview, simulation) is
//! expected to provide, via [`ViewportHost`]:
//! - an invisible full-height probe and its rendered height
//! - marker (e.g. CSS class) add/remove on the page container
//! - scroll position read/write
//! - notification dispatch
//!
//! The adapter forwards every scroll signal to [`Detector::on_scroll`] and
//! drives the one-time bootstrap perturbation with [`Detector::init`] and
//! [`Detector::poll`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod detector;
mod error;
mod host;
mod options;
mod state;
mod tracker;
mod types;


pub use detector::Detector;
pub use error::DetectError;
pub use host::ViewportHost;
pub use options::DetectorOptions;
pub use state::HeightState;
pub use tracker::HeightTracker;
pub use types::{BootstrapPhase, HeightDirection, Visibility};
