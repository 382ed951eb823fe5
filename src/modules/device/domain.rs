use serde::{Deserialize, Serialize};
use std::fmt;

/// Form factor of the client running the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
}

impl DeviceType {
    pub fn is_desktop(&self) -> bool {
        matches!(self, DeviceType::Desktop)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
        };
        write!(f, "{}", name)
    }
}

/// Port for device detection
pub trait DeviceDetector: Send + Sync {
    fn device_type(&self) -> DeviceType;

    fn is_desktop(&self) -> bool {
        self.device_type().is_desktop()
    }
}
