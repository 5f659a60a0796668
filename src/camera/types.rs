//! Camera types and data structures.

use std::fmt;

use thiserror::Error;

/// USB identity of an opened camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceIdentity {
    /// USB vendor ID
    pub vendor_id: u16,
    /// USB product ID
    pub product_id: u16,
}

impl DeviceIdentity {
    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vendor_id 0x{:04x} product_id 0x{:04x}",
            self.vendor_id, self.product_id
        )
    }
}

/// What happened when a single candidate index was probed.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// Device opened and its identity was read
    Reported(DeviceIdentity),
    /// No device at this index, or it could not be opened
    Skipped,
    /// Device opened but reading its identity failed
    Failed(CameraError),
}

impl ProbeOutcome {
    /// Identity of the device, if one was reported.
    pub fn identity(&self) -> Option<DeviceIdentity> {
        match self {
            ProbeOutcome::Reported(identity) => Some(*identity),
            _ => None,
        }
    }

    pub fn is_reported(&self) -> bool {
        matches!(self, ProbeOutcome::Reported(_))
    }
}

/// Result of probing one candidate index.
#[derive(Debug)]
pub struct ProbeRecord {
    /// Candidate index that was probed
    pub index: u32,
    /// Outcome of the probe
    pub outcome: ProbeOutcome,
}

/// Errors that can occur during camera operations.
#[derive(Debug, Error)]
pub enum CameraError {
    /// Listing USB devices failed
    #[error("Failed to enumerate USB devices: {0}")]
    Enumeration(#[source] rusb::Error),
    /// Reading a descriptor from an open device failed
    #[error("Failed to read descriptor of camera {index}: {source}")]
    Descriptor {
        index: u32,
        #[source]
        source: rusb::Error,
    },
    /// Identity was requested from a handle that is not open
    #[error("Camera {0} is not open")]
    NotOpen(u32),
}
