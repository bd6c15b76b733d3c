use log::{warn, Level};
use serde::Deserialize;

use crate::error::MotionError;

pub const SITE_NAME: &str = "OrbitDynamix";
pub const CONTACT_PHONE: &str = "+91 79080 99602";
pub const CONTACT_PHONE_LINK: &str = "tel:+917908099602";
pub const WHATSAPP_LINK: &str = "https://wa.me/917908099602";
pub const CONTACT_EMAIL: &str = "official@orbitdynamix.com";
pub const OFFICE_ADDRESS: &[&str] = &["Mukundapur, Kolkata 700099", "West Bengal, India"];

/// Id of the optional `<script type="application/json">` block in index.html
/// that overrides the motion defaults.
pub const MOTION_CONFIG_ELEMENT_ID: &str = "motion-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Sampling interval for scroll and resize events, ~60Hz by default.
    pub throttle_ms: u32,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            throttle_ms: 16,
            nav: NavConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

/// Navbar hysteresis thresholds, in CSS pixels of scroll offset.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Past this offset the bar switches to its solid, blurred background.
    pub past_threshold_px: f64,
    /// At or above the top of the page up to this offset the bar never hides.
    pub always_visible_px: f64,
    /// Band in which the bar stays visible while scrolling down. Collapsed
    /// onto `always_visible_px` by default.
    pub near_top_px: f64,
    /// Past this offset the scroll-to-top button is shown.
    pub scroll_top_button_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            past_threshold_px: 20.0,
            always_visible_px: 120.0,
            near_top_px: 120.0,
            scroll_top_button_px: 300.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of an element that must be visible before it reveals.
    pub threshold: f64,
    pub root_margin: String,
    pub stagger_delay_ms: f64,
    pub animation_class: String,
    pub hidden_class: String,
    pub mobile_breakpoint: f64,
    pub tablet_breakpoint: f64,
    pub mobile_factor: f64,
    pub tablet_factor: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            stagger_delay_ms: 150.0,
            animation_class: "service-flip-visible".to_string(),
            hidden_class: "service-flip-hidden".to_string(),
            mobile_breakpoint: 768.0,
            tablet_breakpoint: 1024.0,
            mobile_factor: 0.7,
            tablet_factor: 0.85,
        }
    }
}

impl MotionConfig {
    pub fn from_json(raw: &str) -> Result<Self, MotionError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Reads the overrides embedded in the page, falling back to defaults when the
/// block is missing or malformed.
pub fn load() -> MotionConfig {
    match read_embedded() {
        Ok(Some(raw)) => MotionConfig::from_json(&raw).unwrap_or_else(|e| {
            warn!("Ignoring motion config: {}", e);
            MotionConfig::default()
        }),
        Ok(None) => MotionConfig::default(),
        Err(e) => {
            warn!("Could not read motion config: {}", e);
            MotionConfig::default()
        }
    }
}

fn read_embedded() -> Result<Option<String>, MotionError> {
    let window = web_sys::window().ok_or(MotionError::NoWindow)?;
    let document = window.document().ok_or(MotionError::NoDocument)?;
    Ok(document
        .get_element_by_id(MOTION_CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = MotionConfig::from_json("{}").unwrap();
        assert_eq!(config, MotionConfig::default());
        assert_eq!(config.throttle_ms, 16);
        assert_eq!(config.reveal.stagger_delay_ms, 150.0);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = MotionConfig::from_json(
            r#"{ "nav": { "near_top_px": 300.0 }, "reveal": { "mobile_factor": 0.5 } }"#,
        )
        .unwrap();
        assert_eq!(config.nav.near_top_px, 300.0);
        assert_eq!(config.nav.always_visible_px, 120.0);
        assert_eq!(config.reveal.mobile_factor, 0.5);
        assert_eq!(config.reveal.tablet_factor, 0.85);
        assert_eq!(config.throttle_ms, 16);
    }

    #[test]
    fn host_page_embeds_default_motion_config() {
        let page = include_str!("../index.html");
        let open = format!(r#"<script id="{}" type="application/json">"#, MOTION_CONFIG_ELEMENT_ID);
        let start = page.find(&open).expect("motion config block") + open.len();
        let len = page[start..].find("</script>").expect("closing tag");

        let config = MotionConfig::from_json(&page[start..start + len]).unwrap();
        assert_eq!(config, MotionConfig::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = MotionConfig::from_json("{ throttle_ms: ").unwrap_err();
        assert!(matches!(err, MotionError::Config(_)));
    }
}
