pub mod user_agent_detector;

pub use user_agent_detector::{FixedDeviceDetector, UserAgentDeviceDetector};
