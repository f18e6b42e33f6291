#[cfg(target_os = "macos")]
use objc2_foundation::NSBundle;
#[cfg(target_os = "macos")]
use objc2::rc::autoreleasepool;

use objc2::runtime::Bool;
use objc2_user_notifications::{
    UNAuthorizationOptions, UNUserNotificationCenter, UNNotificationRequest,
    UNMutableNotificationContent,
};
use block2::StackBlock;
use objc2_foundation::{NSString, NSError};

use super::NotificationSink;

/// Local user notifications, delivered immediately with the app name as
/// title.
#[derive(Clone)]
pub struct OsNotifications {
    title: String,
}

impl OsNotifications {
    pub fn new(title: &str) -> Self {
        let notifications = Self{title: title.to_string()};
        if notifications.available() {
            notifications.register();
        }
        notifications
    }

    ///Notification center refuses unbundled binaries on macOS
    #[cfg(target_os = "macos")]
    fn available(&self) -> bool {
        unsafe {
            let bundle_url = NSBundle::mainBundle().bundleURL();
            autoreleasepool(|pool| {
                bundle_url.absoluteString()
                    .map(|s| s.to_str(pool).ends_with(".app/"))
                    .unwrap_or(false)
            })
        }
    }

    #[cfg(target_os = "ios")]
    fn available(&self) -> bool {
        true
    }

    fn register(&self) {
        unsafe {
            let center = UNUserNotificationCenter::currentNotificationCenter();
            let options = UNAuthorizationOptions::Alert | UNAuthorizationOptions::Sound;

            let block = StackBlock::new(
                move |granted: Bool, error: *mut NSError| {
                    log::debug!("notification authorization granted: {}", granted.as_bool());
                    if !error.is_null() {
                        log::warn!("notification authorization error");
                    }
                },
            ).copy();

            center.requestAuthorizationWithOptions_completionHandler(options, &block);
        }
    }
}

impl NotificationSink for OsNotifications {
    fn notify(&self, message: &str) {
        log::info!("notify: {message}");
        if !self.available() {
            return;
        }

        unsafe {
            let content = UNMutableNotificationContent::new();
            content.setTitle(&NSString::from_str(&self.title));
            content.setBody(&NSString::from_str(message));

            let identifier = NSString::from_str("torchlight-notice");
            //No trigger delivers right away
            let request = UNNotificationRequest::requestWithIdentifier_content_trigger(
                &identifier,
                &content,
                None,
            );

            let center = UNUserNotificationCenter::currentNotificationCenter();
            center.addNotificationRequest_withCompletionHandler(&request, None);
        }
    }
}
