use std::sync::Arc;

use chrono::Utc;
use pinmap::prelude::*;

/// Standalone map viewer: the static map with fetched markers plus the
/// scheduled-end capture panel.
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = MapConfig::default();
    config.validate()?;
    let projector = Projector::new(config.bounds)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([840.0, 700.0])
            .with_title("pinmap"),
        ..Default::default()
    };

    eframe::run_native(
        "pinmap-app",
        options,
        Box::new(move |cc| Box::new(PinmapApp::new(cc, config, projector))),
    )?;

    Ok(())
}

struct PinmapApp {
    config: MapConfig,
    projector: Projector,
    layer: MarkerLayer,
    points_request: Option<PointsRequest>,
    fetch_status: Option<String>,
    capture_panel: CapturePanel,
}

impl PinmapApp {
    fn new(cc: &eframe::CreationContext<'_>, config: MapConfig, projector: Projector) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        // The one-shot points fetch starts with the view; tearing the app
        // down mid-flight just drops the handle.
        let points_request = Some(PointsRequest::spawn(config.points_endpoint.clone()));

        // Demo source with a fixed reading. A real deployment would plug a
        // platform geolocation backend into the same PositionSource seam.
        let source: Arc<dyn PositionSource> = Arc::new(FixedPositionSource::ok(PositionFix {
            latitude: 35.6762,
            longitude: 139.6503,
            accuracy: 15.0,
            altitude: None,
            heading: None,
            speed: None,
            timestamp: Utc::now(),
        }));
        let capture_panel = CapturePanel::new(Some(source), &CaptureConfig::default());

        Self {
            config,
            projector,
            layer: MarkerLayer::new(),
            points_request,
            fetch_status: None,
            capture_panel,
        }
    }

    fn poll_points(&mut self) {
        let outcome = self.points_request.as_mut().and_then(|r| r.try_outcome());
        if let Some(outcome) = outcome {
            self.points_request = None;
            match outcome {
                Ok(points) => self.layer.set_points(points),
                Err(error) => {
                    self.fetch_status = Some(format!("point fetch failed: {}", error));
                }
            }
        }
    }
}

impl eframe::App for PinmapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_points();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let mut view = MapView::new(&self.layer, &self.projector)
                    .image(egui::include_image!("../assets/japan.png"))
                    .style(self.config.marker)
                    .max_width(self.config.max_display_width);
                if let Some(status) = &self.fetch_status {
                    view = view.status(status.clone());
                }
                ui.add(view);
            });
        });

        if let Some(record) = self.capture_panel.show(ctx) {
            self.layer.set_current_fix(Some(record.point()));
        }

        // Keep polling while either one-shot is in flight
        if self.points_request.is_some() || self.capture_panel.is_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
