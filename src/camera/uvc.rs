//! USB Video Class cameras through libusb.
//!
//! Indices are positions in the list of attached UVC devices, ordered by bus
//! number and device address so the same hardware keeps the same index
//! between runs.

use std::fmt;

use rusb::{Device, DeviceHandle, GlobalContext};

use super::device::{CameraBackend, CameraHandle};
use super::types::{CameraError, DeviceIdentity};

/// USB interface class code for video devices.
pub const USB_CLASS_VIDEO: u8 = 0x0e;

/// A UVC device seen during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvcDeviceInfo {
    /// Position in the enumeration, usable with [`UvcBackend::open`]
    pub index: u32,
    pub bus: u8,
    pub address: u8,
    pub identity: DeviceIdentity,
}

impl fmt::Display for UvcDeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Bus {:03} Device {:03} ID {:04x}:{:04x}",
            self.index,
            self.bus,
            self.address,
            self.identity.vendor_id,
            self.identity.product_id
        )
    }
}

/// Backend that opens UVC cameras with libusb.
#[derive(Debug, Default, Clone, Copy)]
pub struct UvcBackend;

impl UvcBackend {
    pub fn new() -> Self {
        Self
    }

    /// List attached UVC devices in index order.
    pub fn enumerate(&self) -> Result<Vec<UvcDeviceInfo>, CameraError> {
        Ok(uvc_devices()?
            .into_iter()
            .enumerate()
            .filter_map(|(i, device)| {
                let descriptor = device.device_descriptor().ok()?;
                Some(UvcDeviceInfo {
                    index: i as u32,
                    bus: device.bus_number(),
                    address: device.address(),
                    identity: DeviceIdentity::new(
                        descriptor.vendor_id(),
                        descriptor.product_id(),
                    ),
                })
            })
            .collect())
    }
}

impl CameraBackend for UvcBackend {
    type Handle = UvcHandle;

    fn open(&self, index: u32) -> UvcHandle {
        let devices = match uvc_devices() {
            Ok(devices) => devices,
            Err(e) => {
                log::warn!("{}", e);
                return UvcHandle::closed(index);
            }
        };

        let Some(device) = devices.into_iter().nth(index as usize) else {
            log::debug!("No UVC device at index {}", index);
            return UvcHandle::closed(index);
        };

        match device.open() {
            Ok(handle) => {
                log::debug!(
                    "Opened camera {} (bus {:03} device {:03})",
                    index,
                    device.bus_number(),
                    device.address()
                );
                UvcHandle {
                    index,
                    device: Some(handle),
                }
            }
            Err(e) => {
                log::debug!("Could not open camera {}: {}", index, e);
                UvcHandle::closed(index)
            }
        }
    }
}

/// Handle to a UVC camera. The device is closed when this is dropped.
pub struct UvcHandle {
    index: u32,
    device: Option<DeviceHandle<GlobalContext>>,
}

impl UvcHandle {
    fn closed(index: u32) -> Self {
        Self {
            index,
            device: None,
        }
    }

    fn identity_from_descriptor(&self) -> Result<DeviceIdentity, CameraError> {
        let handle = self.device.as_ref().ok_or(CameraError::NotOpen(self.index))?;
        let descriptor = handle
            .device()
            .device_descriptor()
            .map_err(|source| CameraError::Descriptor {
                index: self.index,
                source,
            })?;
        Ok(DeviceIdentity::new(
            descriptor.vendor_id(),
            descriptor.product_id(),
        ))
    }
}

impl fmt::Debug for UvcHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UvcHandle")
            .field("index", &self.index)
            .field("is_open", &self.is_open())
            .finish()
    }
}

impl CameraHandle for UvcHandle {
    fn index(&self) -> u32 {
        self.index
    }

    fn is_open(&self) -> bool {
        self.device.is_some()
    }

    fn vendor_id(&self) -> Result<u16, CameraError> {
        Ok(self.identity_from_descriptor()?.vendor_id)
    }

    fn product_id(&self) -> Result<u16, CameraError> {
        Ok(self.identity_from_descriptor()?.product_id)
    }

    fn identity(&self) -> Result<DeviceIdentity, CameraError> {
        self.identity_from_descriptor()
    }
}

impl Drop for UvcHandle {
    fn drop(&mut self) {
        if self.device.take().is_some() {
            log::debug!("Released camera {}", self.index);
        }
    }
}

/// Attached devices with at least one video-class interface, sorted by
/// (bus, address).
fn uvc_devices() -> Result<Vec<Device<GlobalContext>>, CameraError> {
    let list = rusb::devices().map_err(CameraError::Enumeration)?;
    let mut devices: Vec<_> = list.iter().filter(has_video_interface).collect();
    devices.sort_by_key(|d| (d.bus_number(), d.address()));
    Ok(devices)
}

fn has_video_interface(device: &Device<GlobalContext>) -> bool {
    let config = match device
        .active_config_descriptor()
        .or_else(|_| device.config_descriptor(0))
    {
        Ok(config) => config,
        Err(e) => {
            log::debug!(
                "Skipping bus {:03} device {:03}: no config descriptor ({})",
                device.bus_number(),
                device.address(),
                e
            );
            return false;
        }
    };

    config.interfaces().any(|interface| {
        interface
            .descriptors()
            .any(|alt| alt.class_code() == USB_CLASS_VIDEO)
    })
}
