//! Device access boundary.
//!
//! A [`CameraBackend`] hands out one [`CameraHandle`] per candidate index.
//! Opening never fails outright: an absent or busy device yields a handle
//! whose [`CameraHandle::is_open`] is `false`. Dropping the handle releases
//! the device.

use super::types::{CameraError, DeviceIdentity};

/// An exclusively owned connection attempt to one camera.
pub trait CameraHandle {
    /// Candidate index this handle was opened for.
    fn index(&self) -> u32;

    /// Whether a device is actually open behind this handle.
    fn is_open(&self) -> bool;

    /// USB vendor ID of the open device.
    fn vendor_id(&self) -> Result<u16, CameraError>;

    /// USB product ID of the open device.
    fn product_id(&self) -> Result<u16, CameraError>;

    /// Vendor and product ID together.
    fn identity(&self) -> Result<DeviceIdentity, CameraError> {
        Ok(DeviceIdentity {
            vendor_id: self.vendor_id()?,
            product_id: self.product_id()?,
        })
    }
}

/// Source of camera handles.
pub trait CameraBackend {
    type Handle: CameraHandle;

    /// Acquire a handle for `index`. Absence is reported via `is_open`.
    fn open(&self, index: u32) -> Self::Handle;
}

impl<B: CameraBackend + ?Sized> CameraBackend for &B {
    type Handle = B::Handle;

    fn open(&self, index: u32) -> Self::Handle {
        (**self).open(index)
    }
}
