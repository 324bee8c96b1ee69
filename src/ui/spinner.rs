/// Progress spinner shown while an image is being "analyzed"
use iced::widget::canvas::{self, path, Path, Stroke};
use iced::{mouse, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

use crate::Message;

/// Length of the moving arc
const SWEEP: f32 = TAU / 4.0;
/// Rotation per animation frame
const STEP: f32 = TAU / 60.0;
const STROKE_WIDTH: f32 = 4.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spinner {
    /// Start of the arc, in radians, kept within [0, TAU)
    pub angle: f32,
}

impl Spinner {
    pub fn advance(&mut self) {
        self.angle = (self.angle + STEP) % TAU;
    }
}

impl canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let center = frame.center();
        let radius = (bounds.width.min(bounds.height) / 2.0 - STROKE_WIDTH).max(1.0);
        let palette = theme.extended_palette();

        // Faint full ring as the track
        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_color(palette.background.strong.color)
                .with_width(STROKE_WIDTH),
        );

        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center,
                radius,
                start_angle: Radians(self.angle),
                end_angle: Radians(self.angle + SWEEP),
            });
        });

        frame.stroke(
            &arc,
            Stroke::default()
                .with_color(palette.primary.base.color)
                .with_width(STROKE_WIDTH),
        );

        vec![frame.into_geometry()]
    }
}
