use serde::Deserialize;

use crate::Error;

/// User visible strings. Every field has an English default so a partial
/// JSON table only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub permission_required: String,
    pub no_cameras: String,
    pub no_flash_camera: String,
    pub torch_failed: String,
    ///Prefix, the failure reason is appended after it
    pub init_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            permission_required: "Camera permission is required to use the flashlight".to_string(),
            no_cameras: "This device has no available camera".to_string(),
            no_flash_camera: "No camera with a flash was found".to_string(),
            torch_failed: "Flashlight is not supported or an error occurred".to_string(),
            init_failed: "Camera initialization failed: ".to_string(),
        }
    }
}

impl Messages {
    /// Text shown to the user for a failed operation.
    pub fn for_error(&self, error: &Error) -> String {
        match error {
            Error::PermissionDenied => self.permission_required.clone(),
            Error::NoCameras => self.no_cameras.clone(),
            Error::NoFlashCapableCamera => self.no_flash_camera.clone(),
            Error::TorchUnsupported => self.torch_failed.clone(),
            Error::HardwareUnavailable(reason) => format!("{}{}", self.init_failed, reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    ///One of error, warn, info, debug, trace
    pub log_level: String,
    pub messages: Messages,
}

impl Default for Settings {
    fn default() -> Self {
        Settings{log_level: "warn".to_string(), messages: Messages::default()}
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Unparseable levels fall back to `Warn`.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"messages": {"torch_failed": "手電筒功能不支持或發生錯誤"}}"#).unwrap();
        assert_eq!(settings.messages.torch_failed, "手電筒功能不支持或發生錯誤");
        assert_eq!(settings.messages.no_cameras, Messages::default().no_cameras);
        assert_eq!(settings.level(), log::Level::Warn);
    }

    #[test]
    fn log_level_parses() {
        let settings = Settings::from_json(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(settings.level(), log::Level::Debug);

        let settings = Settings::from_json(r#"{"log_level": "loud"}"#).unwrap();
        assert_eq!(settings.level(), log::Level::Warn);
    }

    #[test]
    fn init_failure_carries_reason() {
        let messages = Messages::default();
        let text = messages.for_error(&Error::HardwareUnavailable("binder died".to_string()));
        assert_eq!(text, "Camera initialization failed: binder died");
        assert_eq!(messages.for_error(&Error::TorchUnsupported), messages.torch_failed);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Settings::from_json("{log_level:").is_err());
    }
}
