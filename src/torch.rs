use crate::hardware::CameraService;
use crate::{Error, Result};

/// Owns the selected camera and forwards on/off requests to it.
///
/// The selection can only change through [`TorchController::select`], which
/// the application calls after a full enumeration.
#[derive(Debug, Default)]
pub struct TorchController {
    selected: Option<String>,
    requested: bool,
}

impl TorchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub(crate) fn select(&mut self, id: Option<String>) {
        self.selected = id;
    }

    ///Last requested state, not necessarily what the hardware did
    pub fn is_on(&self) -> bool {
        self.requested
    }

    /// Without a selected camera this does nothing. Host failures of any
    /// kind collapse into [`Error::TorchUnsupported`].
    pub fn set_torch(&mut self, camera: &dyn CameraService, on: bool) -> Result<()> {
        self.requested = on;
        let Some(id) = self.selected.as_deref() else {
            log::debug!("torch {} ignored, no camera selected", if on {"on"} else {"off"});
            return Ok(());
        };

        camera.set_torch_mode(id, on).map_err(|e| {
            log::warn!("torch {on} on camera {id} failed: {e}");
            Error::TorchUnsupported
        })
    }
}
