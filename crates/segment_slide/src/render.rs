//! Render command output.
//!
//! The switcher does not own a view hierarchy. Each frame it writes a flat
//! command list the host replays on its own surface.

use crate::badge::BadgeKind;
use crate::layout::{Point, Rect};
use crate::style::{Color, Font};

/// A render command for the switcher.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// A title.
    Text {
        /// Text content.
        text: String,
        /// Top-left of the text box.
        origin: Point,
        /// Text color.
        color: Color,
        /// Font.
        font: Font,
    },
    /// A badge for the host to draw.
    Badge {
        /// Badge center.
        center: Point,
        /// Badge height.
        height: f32,
        /// Badge kind.
        kind: BadgeKind,
        /// Count font, for count badges.
        font: Option<Font>,
    },
    /// Scissor rect (clip children).
    PushClip {
        /// Clip bounds.
        bounds: Rect,
    },
    /// Pop scissor rect.
    PopClip,
}

/// One frame of switcher output, in draw order.
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    commands: Vec<RenderCommand>,
}

impl CommandBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the previous frame, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Appends a command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Runs `draw` between a `PushClip` for `bounds` and the matching
    /// `PopClip`, so the pair is always balanced.
    pub fn clipped(&mut self, bounds: Rect, draw: impl FnOnce(&mut Self)) {
        self.commands.push(RenderCommand::PushClip { bounds });
        draw(self);
        self.commands.push(RenderCommand::PopClip);
    }

    /// Commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Filled rects as GPU instances, in draw order.
    #[must_use]
    pub fn quads(&self) -> Vec<QuadInstance> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Rect {
                    bounds,
                    color,
                    corner_radius,
                } => Some(QuadInstance::new(*bounds, *color, *corner_radius)),
                _ => None,
            })
            .collect()
    }
}

/// Rounded quad for instanced drawing.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadInstance {
    /// x, y, width, height.
    pub bounds: [f32; 4],
    /// Color (RGBA).
    pub color: [f32; 4],
    /// Corner radius.
    pub corner_radius: f32,
    /// Keeps the struct 16-byte aligned for uniform buffers.
    pub _pad: [f32; 3],
}

impl QuadInstance {
    /// Creates an instance.
    #[must_use]
    pub fn new(bounds: Rect, color: Color, corner_radius: f32) -> Self {
        Self {
            bounds: [bounds.x, bounds.y, bounds.width, bounds.height],
            color: color.to_array(),
            corner_radius,
            _pad: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipped_is_balanced() {
        let view = Rect::new(0.0, 0.0, 100.0, 40.0);
        let mut buffer = CommandBuffer::new();
        buffer.clipped(view, |buffer| {
            buffer.push(RenderCommand::Rect {
                bounds: Rect::new(10.0, 38.0, 20.0, 2.0),
                color: Color::BLACK,
                corner_radius: 1.0,
            });
        });

        let commands = buffer.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], RenderCommand::PushClip { bounds: view });
        assert_eq!(commands[2], RenderCommand::PopClip);

        buffer.clear();
        assert!(buffer.commands().is_empty());
    }

    #[test]
    fn test_quads_are_castable() {
        let mut buffer = CommandBuffer::new();
        buffer.push(RenderCommand::Rect {
            bounds: Rect::new(1.0, 2.0, 3.0, 4.0),
            color: Color::WHITE,
            corner_radius: 1.5,
        });
        buffer.push(RenderCommand::PopClip);

        let quads = buffer.quads();
        assert_eq!(quads.len(), 1);

        let bytes: &[u8] = bytemuck::cast_slice(&quads);
        assert_eq!(bytes.len(), std::mem::size_of::<QuadInstance>());
        assert_eq!(std::mem::size_of::<QuadInstance>(), 48);
        assert_eq!(quads[0].bounds, [1.0, 2.0, 3.0, 4.0]);
    }
}
