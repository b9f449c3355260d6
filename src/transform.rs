use image::DynamicImage;

/// The five derived versions produced for every invocation.
///
/// Rotations are clockwise, matching `image`'s `rotate90`/`rotate270`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    FlipTopBottom,
    FlopLeftRight,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Transform {
    pub const ALL: [Transform; 5] = [
        Transform::FlipTopBottom,
        Transform::FlopLeftRight,
        Transform::Rotate90,
        Transform::Rotate180,
        Transform::Rotate270,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Transform::FlipTopBottom => "flip-top-bottom.jpg",
            Transform::FlopLeftRight => "flop-left-right.jpg",
            Transform::Rotate90 => "rotate-90.jpg",
            Transform::Rotate180 => "rotate-180.jpg",
            Transform::Rotate270 => "rotate-270.jpg",
        }
    }

    pub fn apply(self, img: &DynamicImage) -> DynamicImage {
        match self {
            Transform::FlipTopBottom => img.flipv(),
            Transform::FlopLeftRight => img.fliph(),
            Transform::Rotate90 => img.rotate90(),
            Transform::Rotate180 => img.rotate180(),
            Transform::Rotate270 => img.rotate270(),
        }
    }
}
