//! Pointer evasion.
//!
//! The target lives in percentage-of-viewport coordinates so it keeps its
//! relative place across resizes. Distances are measured in terminal
//! columns, with rows stretched by the cell aspect ratio so the
//! repulsion radius looks round on screen.

use std::time::Duration;

use tracing::{debug, trace};

use crate::config::{DisplacementMode, EvasionConfig};

/// Escape direction used when the pointer sits exactly on the center.
pub const FALLBACK_ESCAPE: (f64, f64) = (1.0, 0.0);

/// Target center in percent of the viewport, both axes in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const CENTER: Position = Position { x: 50.0, y: 50.0 };

    fn lerp(self, to: Position, t: f64) -> Position {
        Position {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::CENTER
    }
}

/// A point in viewport cells, fractional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Center of the cell at (`col`, `row`).
    pub fn cell_center(col: u16, row: u16) -> Self {
        Self {
            x: f64::from(col) + 0.5,
            y: f64::from(row) + 0.5,
        }
    }
}

/// Arena size and the target's rendered size, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub target_width: u16,
    pub target_height: u16,
}

/// Clamps that keep the whole target on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for ViewportBounds {
    /// Used until the first resize reports a real size.
    fn default() -> Self {
        Self {
            min_x: 10.0,
            max_x: 90.0,
            min_y: 10.0,
            max_y: 90.0,
        }
    }
}

impl ViewportBounds {
    /// Derives bounds from the target's share of the viewport plus padding.
    pub fn for_viewport(viewport: Viewport, padding: f64) -> Self {
        let (min_x, max_x) = axis_bounds(viewport.target_width, viewport.width, padding);
        let (min_y, max_y) = axis_bounds(viewport.target_height, viewport.height, padding);
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn clamp(&self, position: Position) -> Position {
        Position {
            x: position.x.clamp(self.min_x, self.max_x),
            y: position.y.clamp(self.min_y, self.max_y),
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_y..=self.max_y).contains(&position.y)
    }
}

/// Bounds along one axis. Collapses to the middle when the target does
/// not fit.
fn axis_bounds(target: u16, viewport: u16, padding: f64) -> (f64, f64) {
    if viewport == 0 {
        return (50.0, 50.0);
    }
    let half = f64::from(target) * 100.0 / f64::from(viewport) / 2.0;
    let min = half + padding;
    let max = 100.0 - min;
    if min > max {
        (50.0, 50.0)
    } else {
        (min, max)
    }
}

/// Linear glide of the rendered target toward its logical position.
#[derive(Debug, Clone, Copy)]
struct Glide {
    from: Position,
    elapsed: Duration,
}

/// Moves the target away from the pointer.
#[derive(Debug)]
pub struct Evader {
    config: EvasionConfig,
    viewport: Option<Viewport>,
    bounds: ViewportBounds,
    position: Position,
    glide: Glide,
}

impl Evader {
    pub fn new(config: EvasionConfig) -> Self {
        let glide = Glide {
            from: Position::CENTER,
            elapsed: config.glide(),
        };
        Self {
            config,
            viewport: None,
            bounds: ViewportBounds::default(),
            position: Position::CENTER,
            glide,
        }
    }

    /// Logical position, where the target is heading.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Rendered position, part way along the glide.
    pub fn displayed(&self) -> Position {
        let total = self.config.glide();
        if self.glide.elapsed >= total {
            return self.position;
        }
        let t = self.glide.elapsed.as_secs_f64() / total.as_secs_f64();
        self.glide.from.lerp(self.position, t)
    }

    pub fn bounds(&self) -> ViewportBounds {
        self.bounds
    }

    /// Recomputes bounds for a new viewport and pulls the target back
    /// inside them. The rendered target snaps to the result.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        self.bounds = ViewportBounds::for_viewport(viewport, self.config.edge_padding);
        self.position = self.bounds.clamp(self.position);
        self.glide = Glide {
            from: self.position,
            elapsed: self.config.glide(),
        };
        debug!(?viewport, bounds = ?self.bounds, "viewport resized");
    }

    /// Reacts to the pointer at `pointer` (viewport cells).
    ///
    /// Returns true when the target moved.
    pub fn repel(&mut self, pointer: Point) -> bool {
        let Some(viewport) = self.viewport else {
            return false;
        };

        let center = self.displayed();
        let center_x = center.x / 100.0 * f64::from(viewport.width);
        let center_y = center.y / 100.0 * f64::from(viewport.height);
        let dx = pointer.x - center_x;
        let dy = (pointer.y - center_y) * self.config.cell_aspect;
        let distance = dx.hypot(dy);

        let radius = self.config.repulsion_radius;
        if distance >= radius {
            return false;
        }

        let amount = match self.config.displacement {
            DisplacementMode::Proportional => self.config.max_displacement * (1.0 - distance / radius),
            DisplacementMode::Fixed => self.config.max_displacement,
        };
        let (escape_x, escape_y) = if distance > 0.0 {
            (-dx / distance, -dy / distance)
        } else {
            FALLBACK_ESCAPE
        };

        let next = self.bounds.clamp(Position {
            x: self.position.x + escape_x * amount,
            y: self.position.y + escape_y * amount,
        });
        debug_assert!(self.bounds.contains(next));
        if next == self.position {
            return false;
        }

        trace!(distance, amount, ?next, "target repelled");
        self.glide = Glide {
            from: center,
            elapsed: Duration::ZERO,
        };
        self.position = next;
        true
    }

    /// Advances the glide by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.glide.elapsed = self.glide.elapsed.saturating_add(dt);
    }
}
