use kurbo::Rect;

/// Pattern color registered with a [`Document`](crate::core::document::Document).
/// Pages refer to it as `/P<n>` where n is `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternId(pub usize);

impl PatternId {
    pub fn resource_name(&self) -> String {
        format!("P{}", self.0 + 1)
    }
}

/// Represents a single page in a PDF document
#[derive(Debug, Clone)]
pub struct Page {
    pub width: f64,
    pub height: f64,
    pub content: Vec<u8>,
}

impl Page {
    /// Create a new page with specified dimensions
    pub fn new(width: f64, height: f64) -> Self {
        Page {
            width,
            height,
            content: Vec::new(),
        }
    }

    /// Full page area in PDF user space
    pub fn media_box(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Fill a rectangle with a pattern (gradient) color
    pub fn fill_rect_with_pattern(&mut self, rect: &Rect, pattern: PatternId) -> &mut Self {
        let content = format!(
            "q /Pattern cs /{} scn {} {} {} {} re f Q\n",
            pattern.resource_name(), rect.x0, rect.y0, rect.width(), rect.height()
        );
        self.content.extend(content.into_bytes());
        self
    }
}
