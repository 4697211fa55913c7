use crate::config::ScopeConfig;
use crate::display::DisplayState;
use eframe::egui;

const TRACE_COLOR: egui::Color32 = egui::Color32::from_rgb(70, 130, 255);

/// Maps the first `columns` samples onto `rect`, one vertex per pixel column.
///
/// Returns `None` when there is nothing to draw: no columns, an empty buffer,
/// or fewer samples than columns.
pub fn build_polyline(
    samples: &[f32],
    columns: usize,
    rect: egui::Rect,
) -> Option<Vec<egui::Pos2>> {
    if columns == 0 || samples.is_empty() || samples.len() < columns {
        return None;
    }

    let half_height = rect.height() / 2.0;
    let baseline = rect.top() + half_height;

    let points = samples[..columns]
        .iter()
        .enumerate()
        .map(|(i, &amplitude)| {
            egui::pos2(rect.left() + i as f32, baseline + amplitude * half_height)
        })
        .collect();

    Some(points)
}

/// Paints the published trace and records the canvas width for the next tick.
/// Returns whether a trace was stroked this frame.
pub fn render_waveform(ui: &mut egui::Ui, display: &DisplayState, config: &ScopeConfig) -> bool {
    ui.group(|ui| {
        ui.label("Waveform");

        let (response, painter) = ui.allocate_painter(
            egui::vec2(ui.available_width(), config.canvas_height),
            egui::Sense::hover(),
        );

        let rect = response.rect;

        // Draw background
        painter.rect_filled(rect, 0.0, egui::Color32::from_gray(20));

        // Draw center line
        let center_y = rect.center().y;
        painter.line_segment(
            [
                egui::pos2(rect.left(), center_y),
                egui::pos2(rect.right(), center_y),
            ],
            egui::Stroke::new(0.5, egui::Color32::from_gray(80)),
        );

        let samples = display.snapshot();
        let polyline = build_polyline(&samples, display.width().columns(), rect);
        let drawn = polyline.is_some();
        if let Some(points) = polyline {
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(config.stroke_width, TRACE_COLOR),
            ));
        }

        // Picked up by the poller on its next tick, not by this frame
        display.width().set(rect.width());
        drawn
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AudioSource;
    use crate::sampler::WaveformSampler;

    struct SteadySource;

    impl AudioSource for SteadySource {
        fn audio_data(&self) -> Option<Vec<f32>> {
            Some(vec![0.4; 64])
        }
    }

    fn draw_frame(ctx: &egui::Context, display: &DisplayState) -> bool {
        let config = ScopeConfig::default();
        let mut drawn = false;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                drawn = render_waveform(ui, display, &config);
            });
        });
        drawn
    }

    fn canvas(width: f32, height: f32) -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(width, height))
    }

    #[test]
    fn one_vertex_per_column_left_to_right() {
        let samples = [0.0, 0.5, -0.5, 1.0, 0.2];
        let points = build_polyline(&samples, 4, canvas(4.0, 100.0)).unwrap();

        assert_eq!(points.len(), 4);
        assert!(points.windows(2).all(|pair| pair[0].x < pair[1].x));
        assert_eq!(points[0], egui::pos2(10.0, 70.0));
        assert_eq!(points[1], egui::pos2(11.0, 95.0));
        assert_eq!(points[2], egui::pos2(12.0, 45.0));
        assert_eq!(points[3], egui::pos2(13.0, 120.0));
    }

    #[test]
    fn nothing_to_draw_without_enough_samples() {
        let rect = canvas(100.0, 50.0);

        assert!(build_polyline(&[], 0, rect).is_none());
        assert!(build_polyline(&[], 10, rect).is_none());
        assert!(build_polyline(&[0.1, 0.2], 0, rect).is_none());
        assert!(build_polyline(&[0.1, 0.2], 3, rect).is_none());
    }

    #[test]
    fn same_snapshot_same_path() {
        let samples = [0.3, -0.1, 0.4];
        let rect = canvas(3.0, 60.0);

        assert_eq!(
            build_polyline(&samples, 3, rect),
            build_polyline(&samples, 3, rect)
        );
    }

    #[test]
    fn measured_width_reaches_the_next_tick_not_this_frame() {
        let ctx = egui::Context::default();
        let display = DisplayState::new();
        display.publish(&[0.1; 4]);

        // no width known yet, so this frame strokes nothing
        assert!(!draw_frame(&ctx, &display));
        let columns = display.width().columns();
        assert!(columns > 0);
        assert_eq!(display.snapshot().len(), 4);

        let mut sampler = WaveformSampler::new(SteadySource, display.clone());
        sampler.tick();
        assert_eq!(display.snapshot().len(), columns);

        assert!(draw_frame(&ctx, &display));
        assert_eq!(display.width().columns(), columns);
    }
}
