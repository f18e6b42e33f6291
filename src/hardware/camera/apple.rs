use objc2::rc::Retained;
use objc2_foundation::NSString;
use objc2_av_foundation::{AVCaptureDevice, AVCaptureDevicePosition, AVCaptureTorchMode, AVMediaType};

use super::{CameraService, Characteristics, LENS_FACING_BACK, LENS_FACING_FRONT};
use crate::{Error, Result};

/// AVFoundation video capture devices. The torch is driven through the
/// device's torch mode under a configuration lock.
#[derive(Debug, Clone)]
pub struct OsCamera;

impl OsCamera {
    pub fn new() -> Result<Self> {
        Self::media_type()?;
        Ok(OsCamera)
    }

    fn media_type() -> Result<&'static AVMediaType> {
        unsafe { objc2_av_foundation::AVMediaTypeVideo }
            .ok_or_else(|| Error::unavailable("AVMediaTypeVideo is not available"))
    }

    fn device(id: &str) -> Result<Retained<AVCaptureDevice>> {
        unsafe { AVCaptureDevice::deviceWithUniqueID(&NSString::from_str(id)) }
            .ok_or_else(|| Error::unavailable(format!("no capture device {id}")))
    }
}

impl CameraService for OsCamera {
    #[allow(deprecated)]
    fn camera_ids(&self) -> Result<Vec<String>> {
        let media_type = Self::media_type()?;
        let devices = unsafe { AVCaptureDevice::devicesWithMediaType(media_type) };
        Ok(devices.iter().map(|device| unsafe { device.uniqueID() }.to_string()).collect())
    }

    fn characteristics(&self, id: &str) -> Result<Characteristics> {
        let device = Self::device(id)?;
        let position = unsafe { device.position() };
        let lens_facing = match position {
            AVCaptureDevicePosition::Back => Some(LENS_FACING_BACK),
            AVCaptureDevicePosition::Front => Some(LENS_FACING_FRONT),
            _ => None,
        };

        Ok(Characteristics{
            lens_facing,
            focal_lengths: None,
            preview_sizes: None,
            flash_available: Some(unsafe { device.hasTorch() }),
        })
    }

    fn set_torch_mode(&self, id: &str, on: bool) -> Result<()> {
        let device = Self::device(id).map_err(|_| Error::TorchUnsupported)?;
        unsafe {
            if !device.hasTorch() || !device.isTorchModeSupported(AVCaptureTorchMode::On) {
                return Err(Error::TorchUnsupported);
            }

            device.lockForConfiguration().map_err(|e| {
                log::warn!("lockForConfiguration failed for {id}: {e:?}");
                Error::TorchUnsupported
            })?;

            let result = if on {
                device.setTorchModeOnWithLevel_error(1.0).map_err(|e| {
                    log::warn!("setTorchModeOnWithLevel failed for {id}: {e:?}");
                    Error::TorchUnsupported
                })
            } else {
                device.setTorchMode(AVCaptureTorchMode::Off);
                Ok(())
            };

            device.unlockForConfiguration();
            result
        }
    }
}
