/// Cursor position in surface coordinates together with its influence radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Pointer {
    location: Option<(f64, f64)>,
    radius: f64,
}

impl Pointer {
    pub fn new(radius: f64) -> Pointer {
        Pointer {
            location: None,
            radius,
        }
    }

    /// Records a pointer move. The surface scrolls with the document, so the vertical
    /// scroll offset is added to the viewport coordinate.
    pub fn track(&mut self, client_x: f64, client_y: f64, scroll_y: f64) {
        self.location = Some((client_x, client_y + scroll_y));
    }

    pub fn clear(&mut self) {
        self.location = None;
    }

    pub fn location(&self) -> Option<(f64, f64)> {
        self.location
    }

    /// Returns the velocity impulse pushing a point at `(x, y)` away from the pointer, or
    /// `None` when the pointer is absent or the point lies outside the influence radius.
    pub fn repulsion(&self, x: f64, y: f64, strength: f64) -> Option<(f64, f64)> {
        let (px, py) = self.location?;
        let dx = x - px;
        let dy = y - py;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < self.radius {
            let force = (self.radius - distance) / self.radius * strength;
            let angle = dy.atan2(dx);

            Some((angle.cos() * force, angle.sin() * force))
        } else {
            None
        }
    }
}
