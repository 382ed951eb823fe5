pub mod domain;
pub mod infrastructure;

pub use domain::{DeviceDetector, DeviceType};
pub use infrastructure::{FixedDeviceDetector, UserAgentDeviceDetector};
