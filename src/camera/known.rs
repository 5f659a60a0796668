//! Cameras recognized by vendor and product ID.

use super::types::DeviceIdentity;

/// Leap Motion vendor ID (also used by Ultraleap).
pub const LEAP_VID: u16 = 0x2936;
/// Vendor ID found on early Leap Motion Controllers.
pub const LEAP_VID_OLD: u16 = 0xf182;
/// Leap Motion Controller, aka Peripheral.
pub const LEAP_PID_PERIPHERAL: u16 = 0x0003;
/// Ultraleap SIR 170, aka Rigel.
pub const LEAP_PID_RIGEL: u16 = 0x1202;

/// A camera model with a known identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownDevice {
    pub identity: DeviceIdentity,
    /// Human-readable model name
    pub name: &'static str,
    /// Whether the device delivers side-by-side stereo frames
    pub stereo: bool,
}

static KNOWN_DEVICES: &[KnownDevice] = &[
    KnownDevice {
        identity: DeviceIdentity::new(LEAP_VID_OLD, LEAP_PID_PERIPHERAL),
        name: "Leap Motion Controller (Peripheral)",
        stereo: true,
    },
    KnownDevice {
        identity: DeviceIdentity::new(LEAP_VID, LEAP_PID_RIGEL),
        name: "Ultraleap SIR 170 (Rigel)",
        stereo: true,
    },
];

/// Look up a device by its exact vendor/product pair.
pub fn lookup(identity: DeviceIdentity) -> Option<&'static KnownDevice> {
    KNOWN_DEVICES.iter().find(|d| d.identity == identity)
}
