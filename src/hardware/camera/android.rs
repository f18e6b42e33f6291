use jni::objects::{GlobalRef, JFloatArray, JObject, JObjectArray, JString, JValue};
use jni::JNIEnv;
use std::error::Error as StdError;

use super::{CameraService, Characteristics, Resolution};
use crate::hardware::android::AndroidContext;
use crate::{Error, Result};

const CHARACTERISTICS: &str = "android/hardware/camera2/CameraCharacteristics";
const KEY: &str = "Landroid/hardware/camera2/CameraCharacteristics$Key;";

/// camera2 `CameraManager` reached through JNI.
#[derive(Clone)]
pub struct OsCamera {
    android: AndroidContext,
    camera_manager: GlobalRef,
}

impl OsCamera {
    pub fn new(android: &AndroidContext) -> Result<Self> {
        let camera_manager = android.with_env(|env| {
            let camera_service = env
                .get_static_field("android/content/Context", "CAMERA_SERVICE", "Ljava/lang/String;")?
                .l()?;

            let manager = env
                .call_method(
                    android.context(),
                    "getSystemService",
                    "(Ljava/lang/String;)Ljava/lang/Object;",
                    &[JValue::Object(&camera_service)],
                )?
                .l()?;

            if manager.is_null() {
                return Err("CameraManager not available".into());
            }
            Ok(env.new_global_ref(manager)?)
        }).map_err(Error::unavailable)?;

        Ok(Self{android: android.clone(), camera_manager})
    }

    fn key<'a>(env: &mut JNIEnv<'a>, name: &str) -> std::result::Result<JObject<'a>, Box<dyn StdError>> {
        Ok(env.get_static_field(CHARACTERISTICS, name, KEY)?.l()?)
    }

    fn lookup<'a>(env: &mut JNIEnv<'a>, characteristics: &JObject, name: &str) -> std::result::Result<JObject<'a>, Box<dyn StdError>> {
        let key = Self::key(env, name)?;
        Ok(env.call_method(
            characteristics,
            "get",
            "(Landroid/hardware/camera2/CameraCharacteristics$Key;)Ljava/lang/Object;",
            &[JValue::Object(&key)],
        )?.l()?)
    }

    fn lens_facing(env: &mut JNIEnv, characteristics: &JObject) -> std::result::Result<Option<i32>, Box<dyn StdError>> {
        let value = Self::lookup(env, characteristics, "LENS_FACING")?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(env.call_method(&value, "intValue", "()I", &[])?.i()?))
    }

    fn flash_available(env: &mut JNIEnv, characteristics: &JObject) -> std::result::Result<Option<bool>, Box<dyn StdError>> {
        let value = Self::lookup(env, characteristics, "FLASH_INFO_AVAILABLE")?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(env.call_method(&value, "booleanValue", "()Z", &[])?.z()?))
    }

    fn focal_lengths(env: &mut JNIEnv, characteristics: &JObject) -> std::result::Result<Option<Vec<f32>>, Box<dyn StdError>> {
        let value = Self::lookup(env, characteristics, "LENS_INFO_AVAILABLE_FOCAL_LENGTHS")?;
        if value.is_null() {
            return Ok(None);
        }
        let array = JFloatArray::from(value);
        let length = env.get_array_length(&array)?;
        let mut lengths = vec![0.0f32; length as usize];
        env.get_float_array_region(&array, 0, &mut lengths)?;
        Ok(Some(lengths))
    }

    fn preview_sizes(env: &mut JNIEnv, characteristics: &JObject) -> std::result::Result<Option<Vec<Resolution>>, Box<dyn StdError>> {
        let map = Self::lookup(env, characteristics, "SCALER_STREAM_CONFIGURATION_MAP")?;
        if map.is_null() {
            return Ok(None);
        }

        let texture_class = env.find_class("android/graphics/SurfaceTexture")?;
        let sizes = env.call_method(
            &map,
            "getOutputSizes",
            "(Ljava/lang/Class;)[Landroid/util/Size;",
            &[JValue::Object(&texture_class)],
        )?.l()?;
        if sizes.is_null() {
            return Ok(None);
        }

        let sizes = JObjectArray::from(sizes);
        let length = env.get_array_length(&sizes)?;
        let mut resolutions = Vec::with_capacity(length as usize);
        for i in 0..length {
            let size = env.get_object_array_element(&sizes, i)?;
            let width = env.call_method(&size, "getWidth", "()I", &[])?.i()?;
            let height = env.call_method(&size, "getHeight", "()I", &[])?.i()?;
            env.delete_local_ref(size)?;
            resolutions.push(Resolution::new(width.max(0) as u32, height.max(0) as u32));
        }
        Ok(Some(resolutions))
    }
}

impl CameraService for OsCamera {
    fn camera_ids(&self) -> Result<Vec<String>> {
        self.android.with_env(|env| {
            let list = env.call_method(
                self.camera_manager.as_obj(),
                "getCameraIdList",
                "()[Ljava/lang/String;",
                &[],
            )?.l()?;

            let array = JObjectArray::from(list);
            let length = env.get_array_length(&array)?;
            let mut ids = Vec::with_capacity(length as usize);
            for i in 0..length {
                let id = env.get_object_array_element(&array, i)?;
                let id: String = env.get_string(&JString::from(id))?.into();
                ids.push(id);
            }
            Ok(ids)
        }).map_err(Error::unavailable)
    }

    fn characteristics(&self, id: &str) -> Result<Characteristics> {
        self.android.with_env(|env| {
            let id = env.new_string(id)?;
            let characteristics = env.call_method(
                self.camera_manager.as_obj(),
                "getCameraCharacteristics",
                "(Ljava/lang/String;)Landroid/hardware/camera2/CameraCharacteristics;",
                &[JValue::Object(&id)],
            )?.l()?;

            Ok(Characteristics{
                lens_facing: Self::lens_facing(env, &characteristics)?,
                focal_lengths: Self::focal_lengths(env, &characteristics)?,
                preview_sizes: Self::preview_sizes(env, &characteristics)?,
                flash_available: Self::flash_available(env, &characteristics)?,
            })
        }).map_err(Error::unavailable)
    }

    fn set_torch_mode(&self, id: &str, on: bool) -> Result<()> {
        self.android.with_env(|env| {
            let id = env.new_string(id)?;
            env.call_method(
                self.camera_manager.as_obj(),
                "setTorchMode",
                "(Ljava/lang/String;Z)V",
                &[JValue::Object(&id), JValue::Bool(on as u8)],
            )?;
            Ok(())
        }).map_err(|e| {
            log::warn!("setTorchMode({id}, {on}) failed: {e}");
            Error::TorchUnsupported
        })
    }
}
