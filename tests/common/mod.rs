//! Scripted camera backend shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use uvc_scan::camera::{CameraBackend, CameraError, CameraHandle, DeviceIdentity};

/// Open/close bookkeeping shared between a backend and its handles.
#[derive(Debug, Default)]
pub struct HandleLog {
    pub live: Cell<usize>,
    pub max_live: Cell<usize>,
    /// "open N" / "close N" in the order they happened
    pub events: RefCell<Vec<String>>,
}

pub struct ScriptedHandle {
    index: u32,
    identity: Option<DeviceIdentity>,
    log: Rc<HandleLog>,
}

impl CameraHandle for ScriptedHandle {
    fn index(&self) -> u32 {
        self.index
    }

    fn is_open(&self) -> bool {
        self.identity.is_some()
    }

    fn vendor_id(&self) -> Result<u16, CameraError> {
        self.identity
            .map(|i| i.vendor_id)
            .ok_or(CameraError::NotOpen(self.index))
    }

    fn product_id(&self) -> Result<u16, CameraError> {
        self.identity
            .map(|i| i.product_id)
            .ok_or(CameraError::NotOpen(self.index))
    }
}

impl Drop for ScriptedHandle {
    fn drop(&mut self) {
        self.log.live.set(self.log.live.get() - 1);
        self.log
            .events
            .borrow_mut()
            .push(format!("close {}", self.index));
    }
}

/// Backend with cameras at fixed indices.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    cameras: HashMap<u32, DeviceIdentity>,
    pub log: Rc<HandleLog>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_camera(mut self, index: u32, vendor_id: u16, product_id: u16) -> Self {
        self.cameras
            .insert(index, DeviceIdentity::new(vendor_id, product_id));
        self
    }
}

impl CameraBackend for ScriptedBackend {
    type Handle = ScriptedHandle;

    fn open(&self, index: u32) -> ScriptedHandle {
        let live = self.log.live.get() + 1;
        self.log.live.set(live);
        self.log.max_live.set(self.log.max_live.get().max(live));
        self.log.events.borrow_mut().push(format!("open {}", index));
        ScriptedHandle {
            index,
            identity: self.cameras.get(&index).copied(),
            log: Rc::clone(&self.log),
        }
    }
}
