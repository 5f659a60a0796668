//! Camera discovery and identity probing.
//!
//! This module provides:
//! - The device access boundary via [`CameraBackend`] and [`CameraHandle`]
//! - The probe loop via [`Prober`]
//! - A libusb-backed UVC implementation via [`UvcBackend`]
//! - Recognition of known camera models via [`known::lookup`]

mod device;
pub mod known;
mod prober;
mod types;
mod uvc;

pub use device::{CameraBackend, CameraHandle};
pub use known::KnownDevice;
pub use prober::{ProbeEvent, Prober};
pub use types::{CameraError, DeviceIdentity, ProbeOutcome, ProbeRecord};
pub use uvc::{UvcBackend, UvcDeviceInfo, UvcHandle, USB_CLASS_VIDEO};
