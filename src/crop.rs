//! Cover-fit image cropping.
//!
//! [`get_crop`] picks the largest region of an image that has the target
//! box's aspect ratio, positioned by a [`CropAnchor`]. Drawing that region
//! scaled into the box fills it completely without distortion.

#[cfg(test)]
#[path = "crop_test.rs"]
mod crop_test;

use serde::{Deserialize, Serialize, Serializer};

use crate::geom::Size;

/// Smallest dimension accepted for images and boxes.
const MIN_DIMENSION: f64 = 1.0;

/// Which part of the image to keep when cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum CropAnchor {
    LeftTop,
    CenterTop,
    RightTop,
    LeftMiddle,
    #[default]
    CenterMiddle,
    RightMiddle,
    LeftBottom,
    CenterBottom,
    RightBottom,
}

impl CropAnchor {
    const ALL: [CropAnchor; 9] = [
        CropAnchor::LeftTop,
        CropAnchor::CenterTop,
        CropAnchor::RightTop,
        CropAnchor::LeftMiddle,
        CropAnchor::CenterMiddle,
        CropAnchor::RightMiddle,
        CropAnchor::LeftBottom,
        CropAnchor::CenterBottom,
        CropAnchor::RightBottom,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CropAnchor::LeftTop => "left-top",
            CropAnchor::CenterTop => "center-top",
            CropAnchor::RightTop => "right-top",
            CropAnchor::LeftMiddle => "left-middle",
            CropAnchor::CenterMiddle => "center-middle",
            CropAnchor::RightMiddle => "right-middle",
            CropAnchor::LeftBottom => "left-bottom",
            CropAnchor::CenterBottom => "center-bottom",
            CropAnchor::RightBottom => "right-bottom",
        }
    }

    /// Parse `"<horizontal>-<vertical>"` (either order). Unknown values
    /// select [`CropAnchor::CenterMiddle`].
    #[must_use]
    pub fn parse(raw: &str) -> CropAnchor {
        let raw = raw.trim();
        let swapped = raw.split_once('-').map(|(a, b)| format!("{b}-{a}"));
        CropAnchor::ALL
            .into_iter()
            .find(|a| a.as_str() == raw || swapped.as_deref() == Some(a.as_str()))
            .unwrap_or_default()
    }

    /// Horizontal and vertical position of the crop within the slack, each in `[0, 1]`.
    #[must_use]
    pub fn factors(self) -> (f64, f64) {
        let h = match self {
            CropAnchor::LeftTop | CropAnchor::LeftMiddle | CropAnchor::LeftBottom => 0.0,
            CropAnchor::CenterTop | CropAnchor::CenterMiddle | CropAnchor::CenterBottom => 0.5,
            CropAnchor::RightTop | CropAnchor::RightMiddle | CropAnchor::RightBottom => 1.0,
        };
        let v = match self {
            CropAnchor::LeftTop | CropAnchor::CenterTop | CropAnchor::RightTop => 0.0,
            CropAnchor::LeftMiddle | CropAnchor::CenterMiddle | CropAnchor::RightMiddle => 0.5,
            CropAnchor::LeftBottom | CropAnchor::CenterBottom | CropAnchor::RightBottom => 1.0,
        };
        (h, v)
    }
}

impl From<String> for CropAnchor {
    fn from(raw: String) -> Self {
        CropAnchor::parse(&raw)
    }
}

impl Serialize for CropAnchor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Source rectangle in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

fn sanitize(size: Size) -> Size {
    let finite = |v: f64| if v.is_finite() { v } else { MIN_DIMENSION };
    Size::new(finite(size.width), finite(size.height)).at_least(MIN_DIMENSION)
}

/// Largest crop of `image` with the aspect ratio of `target`, placed by `anchor`.
///
/// Non-positive or non-finite sizes are treated as one pixel.
#[must_use]
pub fn get_crop(image: Size, target: Size, anchor: CropAnchor) -> CropRect {
    let image = sanitize(image);
    let target = sanitize(target);
    let target_ratio = target.width / target.height;
    let image_ratio = image.width / image.height;
    let (width, height) = if image_ratio > target_ratio {
        (image.height * target_ratio, image.height)
    } else {
        (image.width, image.width / target_ratio)
    };
    let (fx, fy) = anchor.factors();
    CropRect {
        x: (image.width - width) * fx,
        y: (image.height - height) * fy,
        width,
        height,
    }
}
