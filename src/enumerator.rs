//! Camera enumeration and flash-capable camera selection.
//!
//! The host is queried once per call; every camera becomes an immutable
//! [`CameraDescriptor`] snapshot with its attributes already normalized.

use serde::Serialize;

use crate::hardware::camera::{
    CameraService, Characteristics, Resolution,
    LENS_FACING_BACK, LENS_FACING_EXTERNAL, LENS_FACING_FRONT,
};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Facing {
    Back,
    Front,
    External,
    Unknown,
}

impl Facing {
    /// Unrecognized and missing codes are `Unknown`.
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(LENS_FACING_BACK) => Facing::Back,
            Some(LENS_FACING_FRONT) => Facing::Front,
            Some(LENS_FACING_EXTERNAL) => Facing::External,
            _ => Facing::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Facing::Back => "Back",
            Facing::Front => "Front",
            Facing::External => "External",
            Facing::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraDescriptor {
    pub id: String,
    pub facing: Facing,
    pub focal_lengths_mm: Vec<f32>,
    pub max_preview: Option<Resolution>,
    pub has_flash: bool,
}

impl CameraDescriptor {
    pub fn from_characteristics(id: &str, characteristics: Characteristics) -> Self {
        CameraDescriptor{
            id: id.to_string(),
            facing: Facing::from_code(characteristics.lens_facing),
            focal_lengths_mm: characteristics.focal_lengths.unwrap_or_default(),
            max_preview: characteristics.preview_sizes.as_deref().and_then(max_preview_resolution),
            //A missing flash attribute means no flash
            has_flash: characteristics.flash_available.unwrap_or(false),
        }
    }

    pub fn primary_focal_length(&self) -> Option<f32> {
        self.focal_lengths_mm.first().copied()
    }

    /// Human readable summary, `"Back camera | 4.2mm | max preview 1920x1080"`.
    pub fn name(&self) -> String {
        let focal = match self.primary_focal_length() {
            Some(mm) => format!("{mm:.1}mm"),
            None => "unknown focal length".to_string(),
        };
        let preview = match self.max_preview {
            Some(resolution) => format!("max preview {resolution}"),
            None => "no preview support".to_string(),
        };
        format!("{} camera | {} | {}", self.facing.label(), focal, preview)
    }
}

/// Largest size by pixel count. The first of several equal maxima wins.
pub fn max_preview_resolution(sizes: &[Resolution]) -> Option<Resolution> {
    sizes.iter().copied().fold(None, |best: Option<Resolution>, size| match best {
        Some(best) if best.area() >= size.area() => Some(best),
        _ => Some(size),
    })
}

/// Describes every camera the host reports, in host order.
pub fn enumerate(service: &dyn CameraService) -> Result<Vec<CameraDescriptor>> {
    let ids = service.camera_ids()?;
    let cameras = ids.iter()
        .map(|id| Ok(CameraDescriptor::from_characteristics(id, service.characteristics(id)?)))
        .collect::<Result<Vec<_>>>()?;

    log::info!("{}", summary(&cameras));
    match summary_json(&cameras) {
        Ok(json) => log::debug!("cameras: {json}"),
        Err(e) => log::debug!("camera summary not serializable: {e}"),
    }
    Ok(cameras)
}

///Diagnostic listing of id, name and flash flag per camera
pub fn summary(cameras: &[CameraDescriptor]) -> String {
    let mut text = String::from("Cameras:\n");
    for camera in cameras {
        text.push_str(&format!(
            "ID: {}\nName: {}\nFlash: {}\n---\n",
            camera.id, camera.name(), if camera.has_flash {"yes"} else {"no"}
        ));
    }
    text
}

/// Machine readable form of [`summary`], one object per camera with its
/// derived name.
pub fn summary_json(cameras: &[CameraDescriptor]) -> serde_json::Result<String> {
    #[derive(Serialize)]
    struct Entry<'a> {
        #[serde(flatten)]
        camera: &'a CameraDescriptor,
        name: String,
    }

    serde_json::to_string(&cameras.iter().map(|camera| Entry{camera, name: camera.name()}).collect::<Vec<_>>())
}

/// Id of the first camera with a flash, in host order.
pub fn select_flash_camera(cameras: &[CameraDescriptor]) -> Result<String> {
    cameras.iter()
        .find(|camera| camera.has_flash)
        .map(|camera| camera.id.clone())
        .ok_or(Error::NoFlashCapableCamera)
}

/// Enumerates and selects in one step. No cameras at all is reported as
/// [`Error::NoCameras`] rather than a missing flash.
pub fn discover(service: &dyn CameraService) -> Result<String> {
    let cameras = enumerate(service)?;
    if cameras.is_empty() {
        return Err(Error::NoCameras);
    }
    select_flash_camera(&cameras)
}
