/// A static image resource shown inside the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec {
    pub source: &'static str,
    pub alt: &'static str,
    /// Nominal size in pixels.
    pub width: u32,
    pub height: u32,
}

/// Profile picture shown above the about text.
pub const PROFILE_IMAGE: ImageSpec = ImageSpec {
    source: "/Me.JPG",
    alt: "Profile",
    width: 150,
    height: 150,
};

impl ImageSpec {
    /// Placeholder caption for surfaces that cannot draw bitmaps.
    pub fn caption(&self) -> String {
        format!("[{} {}x{}]", self.alt, self.width, self.height)
    }
}
