//! Procedural "revision cloud" outline.
//!
//! The outline is a closed path made of elliptical arcs whose radii and end
//! points are fixed fractions of the bounding box. The fractions are a
//! rendering contract: saved percentage geometry must draw the same cloud in
//! every renderer, so they must not be tuned.

use std::fmt;

/// Starting point of the outline as `(x, y)` fractions of `(width, height)`.
pub const CLOUD_START: (f32, f32) = (0.37, 0.95);

/// One arc segment of the outline, in fractions of `(width, height)`.
///
/// The arc's x-radius is `radius * width` and its y-radius `radius * height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudArc {
    pub radius: f32,
    pub end_x: f32,
    pub end_y: f32,
}

/// Arc segments, in drawing order. The path closes back to [`CLOUD_START`].
pub const CLOUD_ARCS: [CloudArc; 6] = [
    CloudArc { radius: 0.19, end_x: 0.21, end_y: 0.75 },
    CloudArc { radius: 0.25, end_x: 0.25, end_y: 0.35 },
    CloudArc { radius: 0.22, end_x: 0.5, end_y: 0.2 },
    CloudArc { radius: 0.25, end_x: 0.75, end_y: 0.3 },
    CloudArc { radius: 0.20, end_x: 0.79, end_y: 0.75 },
    CloudArc { radius: 0.19, end_x: 0.63, end_y: 0.95 },
];

/// A single path command with absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo {
        x: f32,
        y: f32,
    },
    /// SVG-style elliptical arc.
    Arc {
        rx: f32,
        ry: f32,
        x_axis_rotation: f32,
        large_arc: bool,
        sweep: bool,
        x: f32,
        y: f32,
    },
    Close,
}

/// A cloud outline sized to a concrete box, local to its top-left corner.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CloudPath {
    commands: Vec<PathCommand>,
}

impl CloudPath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// An empty path draws nothing.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of arc segments.
    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Arc { .. }))
            .count()
    }
}

impl fmt::Display for CloudPath {
    /// Formats the path as SVG path data (`d` attribute).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *command {
                PathCommand::MoveTo { x, y } => write!(f, "M {x} {y}")?,
                PathCommand::Arc {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => write!(
                    f,
                    "A {rx} {ry} {x_axis_rotation} {} {} {x} {y}",
                    u8::from(large_arc),
                    u8::from(sweep)
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Build the cloud outline for a `width` x `height` box.
///
/// Degenerates to an empty path when either dimension is not positive.
pub fn generate_cloud_outline(width: f32, height: f32) -> CloudPath {
    if !(width > 0.0 && height > 0.0) {
        return CloudPath::default();
    }

    let mut commands = Vec::with_capacity(CLOUD_ARCS.len() + 2);
    commands.push(PathCommand::MoveTo {
        x: width * CLOUD_START.0,
        y: height * CLOUD_START.1,
    });
    commands.extend(CLOUD_ARCS.iter().map(|arc| PathCommand::Arc {
        rx: width * arc.radius,
        ry: height * arc.radius,
        x_axis_rotation: 0.0,
        large_arc: false,
        sweep: true,
        x: width * arc.end_x,
        y: height * arc.end_y,
    }));
    commands.push(PathCommand::Close);

    CloudPath { commands }
}
