use super::{CameraService, Characteristics};
use crate::{Error, Result};

///Desktop targets expose no torch capable camera service
#[derive(Debug, Clone)]
pub struct OsCamera;

impl OsCamera {
    pub fn new() -> Result<Self> {
        Ok(OsCamera)
    }
}

impl CameraService for OsCamera {
    fn camera_ids(&self) -> Result<Vec<String>> {
        Err(Error::unavailable("no camera service on this platform"))
    }

    fn characteristics(&self, _id: &str) -> Result<Characteristics> {
        Err(Error::unavailable("no camera service on this platform"))
    }

    fn set_torch_mode(&self, _id: &str, _on: bool) -> Result<()> {
        Err(Error::TorchUnsupported)
    }
}
