use jni::objects::{JObject, JValue};
use jni::JNIEnv;
use std::error::Error;

use super::NotificationSink;
use crate::hardware::android::AndroidContext;

const LENGTH_SHORT: i32 = 0;
///Android 11, text toasts are drawn by the system from here on
const SYSTEM_TOAST_SDK: i32 = 30;

/// Whether a toast posted from a thread that never loops its Looper gets
/// displayed. Older releases run the toast through the calling thread's
/// handler, which never fires on the native thread.
pub(crate) fn toast_visible(sdk_int: i32) -> bool {
    sdk_int >= SYSTEM_TOAST_SDK
}

/// Short `Toast` messages over the activity. Before Android 11 messages
/// only reach logcat, see [`toast_visible`].
#[derive(Clone)]
pub struct OsNotifications {
    android: AndroidContext,
}

impl OsNotifications {
    pub fn new(android: &AndroidContext) -> Self {
        Self{android: android.clone()}
    }

    ///Toast needs a Looper on the calling thread
    fn prepare_looper(env: &mut JNIEnv) -> Result<(), Box<dyn Error>> {
        let looper = env
            .call_static_method("android/os/Looper", "myLooper", "()Landroid/os/Looper;", &[])?
            .l()?;
        if looper.is_null() {
            env.call_static_method("android/os/Looper", "prepare", "()V", &[])?;
        }
        Ok(())
    }

    fn sdk_int(env: &mut JNIEnv) -> Result<i32, Box<dyn Error>> {
        Ok(env.get_static_field("android/os/Build$VERSION", "SDK_INT", "I")?.i()?)
    }

    fn toast(&self, message: &str) -> Result<(), Box<dyn Error>> {
        self.android.with_env(|env| {
            let sdk_int = Self::sdk_int(env)?;
            if !toast_visible(sdk_int) {
                log::warn!("toast unavailable on SDK {sdk_int}: {message}");
                return Ok(());
            }
            Self::prepare_looper(env)?;

            let text = env.new_string(message)?;
            let toast = env.call_static_method(
                "android/widget/Toast",
                "makeText",
                "(Landroid/content/Context;Ljava/lang/CharSequence;I)Landroid/widget/Toast;",
                &[
                    JValue::Object(self.android.context()),
                    JValue::Object(&JObject::from(text)),
                    JValue::Int(LENGTH_SHORT),
                ],
            )?.l()?;

            env.call_method(&toast, "show", "()V", &[])?;
            Ok(())
        })
    }
}

impl NotificationSink for OsNotifications {
    fn notify(&self, message: &str) {
        log::info!("notify: {message}");
        if let Err(e) = self.toast(message) {
            log::error!("Failed to show toast: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_need_system_rendering() {
        assert!(!toast_visible(29));
        assert!(toast_visible(30));
        assert!(toast_visible(34));
    }
}
