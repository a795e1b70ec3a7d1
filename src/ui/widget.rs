use crate::core::config::MarkerStyle;
use crate::core::geo::RenderSize;
use crate::core::projector::Projector;
use crate::layers::marker::MarkerLayer;
use egui::{Color32, ImageSource, Rect, Response, Sense, Ui, Vec2, Widget};

/// Immediate-mode map view: the static background image with one dot per
/// in-bounds marker placement.
///
/// The rendered size is read back from the image's rect on every pass, so
/// the marker positions follow the live layout without any resize listener;
/// nothing here can outlive the view.
pub struct MapView<'a> {
    layer: &'a MarkerLayer,
    projector: &'a Projector,
    style: MarkerStyle,
    max_width: f32,
    image: Option<ImageSource<'a>>,
    /// Forces an exact widget size; mainly for tests and fixed layouts.
    size: Option<Vec2>,
    /// Non-blocking diagnostic shown under the map (e.g. a failed fetch).
    status: Option<String>,
}

impl<'a> MapView<'a> {
    pub fn new(layer: &'a MarkerLayer, projector: &'a Projector) -> Self {
        Self {
            layer,
            projector,
            style: MarkerStyle::default(),
            max_width: crate::constants::MAX_DISPLAY_WIDTH,
            image: None,
            size: None,
            status: None,
        }
    }

    /// Sets the background image source.
    pub fn image(mut self, image: ImageSource<'a>) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the marker appearance.
    pub fn style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the maximum rendered width.
    pub fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    /// Forces an exact size instead of following the image layout.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    /// Shows a one-line status message under the map.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    fn background(&self, ui: &mut Ui) -> Response {
        match (&self.image, self.size) {
            (Some(source), Some(size)) => {
                ui.add(egui::Image::new(source.clone()).fit_to_exact_size(size))
            }
            (Some(source), None) => ui.add(egui::Image::new(source.clone()).max_width(self.max_width)),
            // No image configured: a plain placeholder surface of the
            // requested size, so markers can still be exercised.
            (None, size) => {
                let size = size.unwrap_or_else(|| Vec2::new(self.max_width, self.max_width * 0.75));
                let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
                ui.painter()
                    .rect_filled(rect, 0.0, Color32::from_gray(230));
                response
            }
        }
    }

    fn draw_markers(&self, ui: &mut Ui, image_rect: Rect) {
        let size = RenderSize::new(image_rect.width() as f64, image_rect.height() as f64);

        for placement in self.layer.placements(self.projector, size) {
            let center = image_rect.min
                + Vec2::new(placement.pixel.x as f32, placement.pixel.y as f32);
            let (r, g, b) = if placement.is_current_fix {
                self.style.accent_color
            } else {
                self.style.color
            };

            let painter = ui.painter();
            // Light ring under the dot, then the dot itself
            painter.circle_filled(
                center,
                self.style.radius + self.style.ring_width,
                Color32::from_rgba_unmultiplied(255, 255, 255, 230),
            );
            painter.circle_filled(center, self.style.radius, Color32::from_rgb(r, g, b));

            let hover_rect = Rect::from_center_size(
                center,
                Vec2::splat((self.style.radius + self.style.ring_width) * 2.0),
            );
            ui.allocate_rect(hover_rect, Sense::hover())
                .on_hover_text(placement.tooltip);
        }
    }
}

impl Widget for MapView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let response = self.background(ui);
        self.draw_markers(ui, response.rect);

        if let Some(status) = &self.status {
            ui.colored_label(Color32::from_rgb(200, 60, 60), status.as_str());
        }

        response
    }
}
