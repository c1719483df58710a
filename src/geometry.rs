/// Bounding box in CSS pixels, relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Offset that moves an element from its current box to the viewport center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlightVector {
    pub dx: f64,
    pub dy: f64,
}

impl FlightVector {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn toward_center(bounds: Rect, viewport: Viewport) -> Self {
        let (from_x, from_y) = bounds.center();
        let (to_x, to_y) = viewport.center();
        Self {
            dx: to_x - from_x,
            dy: to_y - from_y,
        }
    }
}
