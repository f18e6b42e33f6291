//! In-memory camera service.
//!
//! Emulates a host camera subsystem for tests and for desktop development
//! where no torch hardware exists. Clones share the recorded torch calls.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{CameraService, Characteristics};
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct DummyCamera {
    cameras: Vec<(String, Characteristics)>,
    torch_calls: Rc<RefCell<Vec<(String, bool)>>>,
    unreachable: bool,
    reject_torch: Rc<Cell<bool>>,
}

impl DummyCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a camera, ids are reported in insertion order.
    pub fn with_camera(mut self, id: &str, characteristics: Characteristics) -> Self {
        self.cameras.push((id.to_string(), characteristics));
        self
    }

    /// Adds a back facing camera that only reports its flash attribute.
    pub fn with_flash(self, id: &str, flash: Option<bool>) -> Self {
        self.with_camera(id, Characteristics{
            lens_facing: Some(super::LENS_FACING_BACK),
            flash_available: flash,
            ..Default::default()
        })
    }

    ///Every query fails as if the camera service could not be reached
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn reject_torch(&self, reject: bool) {
        self.reject_torch.set(reject);
    }

    /// Every torch call received so far, including rejected ones.
    pub fn torch_calls(&self) -> Vec<(String, bool)> {
        self.torch_calls.borrow().clone()
    }
}

impl CameraService for DummyCamera {
    fn camera_ids(&self) -> Result<Vec<String>> {
        if self.unreachable {
            return Err(Error::unavailable("dummy camera service unreachable"));
        }
        Ok(self.cameras.iter().map(|(id, _)| id.clone()).collect())
    }

    fn characteristics(&self, id: &str) -> Result<Characteristics> {
        if self.unreachable {
            return Err(Error::unavailable("dummy camera service unreachable"));
        }
        self.cameras.iter()
            .find(|(camera, _)| camera == id)
            .map(|(_, characteristics)| characteristics.clone())
            .ok_or_else(|| Error::unavailable(format!("unknown camera id {id}")))
    }

    fn set_torch_mode(&self, id: &str, on: bool) -> Result<()> {
        self.torch_calls.borrow_mut().push((id.to_string(), on));
        if self.unreachable || self.reject_torch.get() || !self.cameras.iter().any(|(c, _)| c == id) {
            return Err(Error::TorchUnsupported);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_torch_calls() {
        let camera = DummyCamera::new().with_flash("0", Some(true));
        let handle = camera.clone();
        camera.set_torch_mode("0", true).unwrap();
        assert_eq!(handle.torch_calls(), vec![("0".to_string(), true)]);
    }

    #[test]
    fn unknown_id_is_rejected() {
        let camera = DummyCamera::new().with_flash("0", Some(true));
        assert_eq!(camera.set_torch_mode("7", true), Err(Error::TorchUnsupported));
        assert!(matches!(camera.characteristics("7"), Err(Error::HardwareUnavailable(_))));
    }

    #[test]
    fn unreachable_service_fails_queries() {
        let camera = DummyCamera::new().with_flash("0", Some(true)).unreachable();
        assert!(matches!(camera.camera_ids(), Err(Error::HardwareUnavailable(_))));
    }
}
