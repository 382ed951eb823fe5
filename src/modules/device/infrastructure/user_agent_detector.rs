use crate::modules::device::domain::{DeviceDetector, DeviceType};
use regex::Regex;
use std::sync::OnceLock;

static TABLET: OnceLock<Regex> = OnceLock::new();
static MOBILE: OnceLock<Regex> = OnceLock::new();
static ANDROID_PHONE: OnceLock<Regex> = OnceLock::new();

fn tablet_pattern() -> &'static Regex {
    TABLET.get_or_init(|| {
        Regex::new(r"(?i)ipad|tablet|playbook|silk|kindle").expect("tablet pattern is valid")
    })
}

fn mobile_pattern() -> &'static Regex {
    MOBILE.get_or_init(|| {
        Regex::new(r"(?i)mobi|iphone|ipod|android|windows phone|blackberry|opera mini")
            .expect("mobile pattern is valid")
    })
}

fn android_phone_pattern() -> &'static Regex {
    ANDROID_PHONE.get_or_init(|| {
        Regex::new(r"(?i)android.*mobile").expect("android phone pattern is valid")
    })
}

/// Classify a user agent string; absent or unrecognised agents count as desktop
pub fn classify_user_agent(user_agent: &str) -> DeviceType {
    let ua = user_agent.trim();
    if ua.is_empty() {
        return DeviceType::Desktop;
    }
    // Android tablets omit the "Mobile" token phones carry
    let android_tablet =
        ua.to_ascii_lowercase().contains("android") && !android_phone_pattern().is_match(ua);
    if tablet_pattern().is_match(ua) || android_tablet {
        DeviceType::Tablet
    } else if mobile_pattern().is_match(ua) {
        DeviceType::Mobile
    } else {
        DeviceType::Desktop
    }
}

/// Detects the device from the user agent the front end reports
pub struct UserAgentDeviceDetector {
    device_type: DeviceType,
    user_agent: Option<String>,
}

impl UserAgentDeviceDetector {
    pub fn new(user_agent: Option<String>) -> Self {
        let device_type = user_agent
            .as_deref()
            .map(classify_user_agent)
            .unwrap_or(DeviceType::Desktop);
        log::debug!(
            "Device: {} (user agent: {})",
            device_type,
            user_agent.as_deref().unwrap_or("<none>")
        );
        Self {
            device_type,
            user_agent,
        }
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl DeviceDetector for UserAgentDeviceDetector {
    fn device_type(&self) -> DeviceType {
        self.device_type
    }
}

/// Detector pinned to one device type
pub struct FixedDeviceDetector(pub DeviceType);

impl DeviceDetector for FixedDeviceDetector {
    fn device_type(&self) -> DeviceType {
        self.0
    }
}
