/// Physical rotation state of the capture device.
///
/// `FaceUp` and `FaceDown` cannot be told apart from the screen
/// rotation alone; together with `Unknown` they share the fallback
/// image orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceOrientation {
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
    Unknown,
}

/// Rotation the detector must apply to raw pixel data before looking
/// for faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageOrientation {
    Up,
    Down,
    Left,
    Right,
}

impl DeviceOrientation {
    /// Image orientation tag compensating for the current physical
    /// rotation. Total: every rotation state maps to exactly one tag.
    pub fn image_orientation(self) -> ImageOrientation {
        match self {
            DeviceOrientation::Portrait => ImageOrientation::Right,
            DeviceOrientation::LandscapeRight => ImageOrientation::Down,
            DeviceOrientation::PortraitUpsideDown => ImageOrientation::Left,
            DeviceOrientation::LandscapeLeft => ImageOrientation::Up,
            // Undetectable or unreported rotation: assume upright pixels.
            DeviceOrientation::FaceUp | DeviceOrientation::FaceDown | DeviceOrientation::Unknown => {
                ImageOrientation::Up
            }
        }
    }
}
