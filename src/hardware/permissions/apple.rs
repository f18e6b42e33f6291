use objc2::runtime::Bool;
use objc2_av_foundation::{AVAuthorizationStatus, AVCaptureDevice, AVMediaType};
use block2::RcBlock;

use super::{PermissionService, PermissionStatus};
use crate::{Error, Result};

#[derive(Clone, Default)]
pub struct OsPermissions;

impl OsPermissions {
    pub fn new() -> Self {
        Self
    }

    fn media_type() -> Result<&'static AVMediaType> {
        unsafe { objc2_av_foundation::AVMediaTypeVideo }
            .ok_or_else(|| Error::unavailable("AVMediaTypeVideo is not available"))
    }
}

impl PermissionService for OsPermissions {
    fn status(&self) -> PermissionStatus {
        let Ok(media_type) = Self::media_type() else {
            return PermissionStatus::Denied;
        };
        match unsafe { AVCaptureDevice::authorizationStatusForMediaType(media_type) } {
            AVAuthorizationStatus::Authorized => PermissionStatus::Granted,
            AVAuthorizationStatus::NotDetermined => PermissionStatus::NotDetermined,
            _ => PermissionStatus::Denied,
        }
    }

    fn request(&self) -> Result<()> {
        let media_type = Self::media_type()?;
        let handler = RcBlock::new(|granted: Bool| {
            log::debug!("camera access granted: {}", granted.as_bool());
        });
        unsafe {
            AVCaptureDevice::requestAccessForMediaType_completionHandler(media_type, &handler);
        }
        Ok(())
    }
}
