mod logger;
pub mod camera;
pub mod notifications;
pub mod permissions;

#[cfg(target_os = "android")]
mod android;

pub use logger::Logger;
pub use camera::{CameraService, Characteristics, OsCamera, Resolution};
pub use notifications::{NotificationSink, OsNotifications};
pub use permissions::{OsPermissions, PermissionService, PermissionStatus};

/// Hardware context contains the interfaces the flashlight talks to.
/// Everything is used from the event thread only so nothing needs to be Send.
pub struct Context {
    pub camera: Box<dyn CameraService>,
    pub permissions: Box<dyn PermissionService>,
    pub notifications: Box<dyn NotificationSink>,
}

impl Context {
    /// Context over explicit services, used by tests and custom hosts.
    pub fn with(
        camera: impl CameraService + 'static,
        permissions: impl PermissionService + 'static,
        notifications: impl NotificationSink + 'static,
    ) -> Self {
        Context{
            camera: Box::new(camera),
            permissions: Box::new(permissions),
            notifications: Box::new(notifications),
        }
    }

    /// Creates the platform context. Must be called once the activity
    /// context is published on Android.
    #[cfg(target_os = "android")]
    pub fn new(_app_name: &str) -> crate::Result<Self> {
        let android = android::AndroidContext::new().map_err(crate::Error::unavailable)?;
        Ok(Self::with(
            OsCamera::new(&android)?,
            OsPermissions::new(&android),
            OsNotifications::new(&android),
        ))
    }

    #[cfg(any(target_os = "ios", target_os = "macos"))]
    pub fn new(app_name: &str) -> crate::Result<Self> {
        Ok(Self::with(
            OsCamera::new()?,
            OsPermissions::new(),
            OsNotifications::new(app_name),
        ))
    }

    #[cfg(not(any(target_os = "ios", target_os = "macos", target_os = "android")))]
    pub fn new(_app_name: &str) -> crate::Result<Self> {
        Ok(Self::with(OsCamera::new()?, OsPermissions::new(), OsNotifications::new()))
    }

    pub fn notify(&self, message: &str) {
        self.notifications.notify(message);
    }
}
