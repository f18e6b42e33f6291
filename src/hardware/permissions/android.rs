use jni::objects::{JObject, JValue};
use std::cell::Cell;

use super::{PermissionService, PermissionStatus};
use crate::hardware::android::AndroidContext;
use crate::{Error, Result};

const CAMERA: &str = "android.permission.CAMERA";
const CAMERA_REQUEST_CODE: i32 = 100;
const PERMISSION_GRANTED: i32 = 0;

/// Runtime CAMERA permission on the hosting activity.
pub struct OsPermissions {
    android: AndroidContext,
    requested: Cell<bool>,
}

impl OsPermissions {
    pub fn new(android: &AndroidContext) -> Self {
        Self{android: android.clone(), requested: Cell::new(false)}
    }
}

impl PermissionService for OsPermissions {
    fn status(&self) -> PermissionStatus {
        let granted = self.android.with_env(|env| {
            let permission = env.new_string(CAMERA)?;
            Ok(env.call_method(
                self.android.context(),
                "checkSelfPermission",
                "(Ljava/lang/String;)I",
                &[JValue::Object(&permission)],
            )?.i()? == PERMISSION_GRANTED)
        });

        match granted {
            Ok(true) => PermissionStatus::Granted,
            //Android only reports granted or denied, a prompt never shown counts as undecided
            Ok(false) if !self.requested.get() => PermissionStatus::NotDetermined,
            Ok(false) => PermissionStatus::Denied,
            Err(e) => {
                log::error!("checkSelfPermission failed: {e}");
                PermissionStatus::Denied
            }
        }
    }

    fn request(&self) -> Result<()> {
        self.android.with_env(|env| {
            let permission = env.new_string(CAMERA)?;
            let permissions = env.new_object_array(1, "java/lang/String", &permission)?;
            env.call_method(
                self.android.context(),
                "requestPermissions",
                "([Ljava/lang/String;I)V",
                &[JValue::Object(&JObject::from(permissions)), JValue::Int(CAMERA_REQUEST_CODE)],
            )?;
            Ok(())
        }).map_err(Error::unavailable)?;
        self.requested.set(true);
        Ok(())
    }
}
