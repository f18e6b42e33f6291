#[cfg(any(target_os = "ios", target_os = "macos"))]
mod apple;
#[cfg(any(target_os = "ios", target_os = "macos"))]
pub use apple::OsNotifications;

#[cfg(target_os = "android")]
mod android;
#[cfg(target_os = "android")]
pub use android::OsNotifications;

/// Receives short user visible messages. Fire and forget.
pub trait NotificationSink {
    fn notify(&self, message: &str);
}

impl<F: Fn(&str)> NotificationSink for F {
    fn notify(&self, message: &str) {
        self(message)
    }
}

///Desktop targets have nowhere to toast so messages go to the log
#[cfg(not(any(target_os = "ios", target_os = "macos", target_os = "android")))]
#[derive(Clone, Default)]
pub struct OsNotifications;

#[cfg(not(any(target_os = "ios", target_os = "macos", target_os = "android")))]
impl OsNotifications {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(any(target_os = "ios", target_os = "macos", target_os = "android")))]
impl NotificationSink for OsNotifications {
    fn notify(&self, message: &str) {
        log::warn!("{message}");
    }
}
