use crate::Result;

#[cfg(any(target_os = "ios", target_os = "macos"))]
mod apple;
#[cfg(any(target_os = "ios", target_os = "macos"))]
pub use apple::OsPermissions;

#[cfg(target_os = "android")]
mod android;
#[cfg(target_os = "android")]
pub use android::OsPermissions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    ///The user has not answered yet
    NotDetermined,
}

/// Camera access capability. `request` only shows the OS prompt, the answer
/// comes back later as [`Event::Permission`](crate::Event::Permission) or is
/// picked up by `status` once the app resumes.
pub trait PermissionService {
    fn status(&self) -> PermissionStatus;
    fn request(&self) -> Result<()>;
}

///Desktop targets do not gate camera access
#[cfg(not(any(target_os = "ios", target_os = "macos", target_os = "android")))]
#[derive(Clone, Default)]
pub struct OsPermissions;

#[cfg(not(any(target_os = "ios", target_os = "macos", target_os = "android")))]
impl OsPermissions {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(any(target_os = "ios", target_os = "macos", target_os = "android")))]
impl PermissionService for OsPermissions {
    fn status(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn request(&self) -> Result<()> {
        Ok(())
    }
}
