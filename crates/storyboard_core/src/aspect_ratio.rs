//! Aspect ratios accepted by the image backend.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Closed set of aspect ratios a run can be rendered at.
///
/// Parses from and displays as the ratio string.
///
/// # Examples
///
/// ```
/// use storyboard_core::AspectRatio;
/// use std::str::FromStr;
///
/// let ratio = AspectRatio::from_str("9:16").unwrap();
/// assert_eq!(ratio, AspectRatio::Vertical);
/// assert_eq!(ratio.to_string(), "9:16");
/// assert_eq!(AspectRatio::default(), AspectRatio::Widescreen);
/// assert!(AspectRatio::from_str("2:1").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum AspectRatio {
    /// 1:1
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square,
    /// 16:9
    #[default]
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Widescreen,
    /// 9:16
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Vertical,
    /// 4:3
    #[serde(rename = "4:3")]
    #[strum(serialize = "4:3")]
    Standard,
    /// 3:4
    #[serde(rename = "3:4")]
    #[strum(serialize = "3:4")]
    Portrait,
}

impl AspectRatio {
    /// Human-readable label for selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "Widescreen (16:9)",
            AspectRatio::Vertical => "Vertical (9:16)",
            AspectRatio::Standard => "Standard (4:3)",
            AspectRatio::Portrait => "Portrait (3:4)",
            AspectRatio::Square => "Square (1:1)",
        }
    }
}
