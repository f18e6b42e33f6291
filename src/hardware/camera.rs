use serde::Serialize;

use crate::Result;

#[cfg(any(target_os = "ios", target_os = "macos"))]
mod apple;
#[cfg(any(target_os = "ios", target_os = "macos"))]
pub use apple::OsCamera;

#[cfg(target_os = "android")]
mod android;
#[cfg(target_os = "android")]
pub use android::OsCamera;

#[cfg(not(any(target_os = "ios", target_os = "macos", target_os = "android")))]
mod unsupported;
#[cfg(not(any(target_os = "ios", target_os = "macos", target_os = "android")))]
pub use unsupported::OsCamera;

pub mod dummy;

///Host facing codes, these follow android.hardware.camera2 and other backends map onto them
pub const LENS_FACING_FRONT: i32 = 0;
pub const LENS_FACING_BACK: i32 = 1;
pub const LENS_FACING_EXTERNAL: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Resolution{width, height}
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Static attributes of one camera unit as the host reports them.
///
/// Each field is `None` when the host has no value for the attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Characteristics {
    pub lens_facing: Option<i32>,
    pub focal_lengths: Option<Vec<f32>>,
    ///Output sizes for a generic texture consumer, in host order
    pub preview_sizes: Option<Vec<Resolution>>,
    pub flash_available: Option<bool>,
}

/// Typed access to the host camera subsystem.
///
/// Implementations report an unreachable service as
/// [`Error::HardwareUnavailable`](crate::Error::HardwareUnavailable) and any
/// rejected torch change as [`Error::TorchUnsupported`](crate::Error::TorchUnsupported).
pub trait CameraService {
    fn camera_ids(&self) -> Result<Vec<String>>;
    fn characteristics(&self, id: &str) -> Result<Characteristics>;
    fn set_torch_mode(&self, id: &str, on: bool) -> Result<()>;
}
