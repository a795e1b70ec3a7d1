use std::sync::Arc;

use egui::{Align2, Context};

use crate::core::config::CaptureConfig;
use crate::geolocate::capture::{CaptureRecord, CaptureRequest, Notice, ScheduleInput};
use crate::geolocate::provider::{GeolocateOptions, PositionSource};

/// The scheduled-end-time form and one-shot capture trigger, layered on top
/// of the plain map view as an optional feature.
///
/// Owns the three pieces of state the flow needs: the free-form schedule
/// text, the capture in flight (if any) and the currently displayed blocking
/// notice. The position source is optional; its absence is reported as an
/// unsupported-capability notice when the user tries to capture.
pub struct CapturePanel {
    schedule: ScheduleInput,
    source: Option<Arc<dyn PositionSource>>,
    options: GeolocateOptions,
    pending: Option<CaptureRequest>,
    notice: Option<Notice>,
    last_capture: Option<CaptureRecord>,
}

impl CapturePanel {
    pub fn new(source: Option<Arc<dyn PositionSource>>, config: &CaptureConfig) -> Self {
        Self {
            schedule: ScheduleInput::new(),
            source,
            options: config.options(),
            pending: None,
            notice: None,
            last_capture: None,
        }
    }

    /// The most recent successful capture, if any.
    pub fn last_capture(&self) -> Option<&CaptureRecord> {
        self.last_capture.as_ref()
    }

    /// True while a capture is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Renders the panel and drives the capture flow. Returns a record on
    /// the frame a capture resolves successfully, so the caller can react
    /// (e.g. drop a current-fix marker on the map).
    pub fn show(&mut self, ctx: &Context) -> Option<CaptureRecord> {
        let mut fresh_capture = None;

        // Resolve a capture in flight before drawing anything
        let outcome = self.pending.as_mut().and_then(|p| p.try_outcome());
        if let Some(outcome) = outcome {
            self.pending = None;
            match outcome {
                Ok(record) => {
                    self.last_capture = Some(record.clone());
                    fresh_capture = Some(record);
                }
                Err(error) => self.notice = Some(Notice::Geolocate(error)),
            }
        }

        egui::Window::new("Scheduled end")
            .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Scheduled end time");
                    ui.add(
                        egui::TextEdit::singleline(self.schedule.text_mut())
                            .hint_text("2025-08-17T12:00"),
                    );
                });

                ui.horizontal(|ui| {
                    let idle = self.pending.is_none();
                    if ui
                        .add_enabled(idle, egui::Button::new("Log current position"))
                        .clicked()
                    {
                        match CaptureRequest::begin(
                            &self.schedule,
                            self.source.clone(),
                            self.options.clone(),
                        ) {
                            Ok(request) => self.pending = Some(request),
                            Err(notice) => self.notice = Some(notice),
                        }
                    }
                    if !idle {
                        ui.spinner();
                    }
                });

                if let Some(record) = &self.last_capture {
                    ui.small(format!(
                        "logged {:.4}, {:.4} at {}",
                        record.latitude, record.longitude, record.captured_at_utc
                    ));
                }
            });

        self.show_notice(ctx);
        fresh_capture
    }

    /// The blocking notice window. Nothing else in the panel reacts until
    /// the user dismisses it.
    fn show_notice(&mut self, ctx: &Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let message = notice.message();

        let mut dismissed = false;
        egui::Window::new("Notice")
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(message);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.notice = None;
        }
    }
}
