use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::Serialize;

use crate::core::geo::GeoPoint;
use crate::geolocate::provider::{GeolocateError, GeolocateOptions, PositionSource};

/// The scheduled end time as the user typed it. Held as free-form text and
/// only interpreted at submission.
#[derive(Debug, Clone, Default)]
pub struct ScheduleInput {
    text: String,
}

impl ScheduleInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for text-field bindings.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Interprets the text as a local `YYYY-MM-DDTHH:MM[:SS]` datetime and
    /// normalizes it to UTC. Returns `None` for empty or unparseable input;
    /// callers treat both as missing input.
    pub fn normalized(&self) -> Option<DateTime<Utc>> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
            .ok()?;
        let local = Local.from_local_datetime(&naive).earliest()?;
        Some(local.with_timezone(&Utc))
    }
}

/// Blocking user-facing notices raised by the capture flow before or after
/// the platform call. Each aborts the operation with no state change.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// No (or unparseable) scheduled end time entered.
    MissingSchedule,
    /// The environment exposes no position source.
    Unsupported,
    /// The position request itself failed.
    Geolocate(GeolocateError),
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingSchedule => "Please enter a valid scheduled end time.",
            Self::Unsupported => "Location capture is not supported in this environment.",
            Self::Geolocate(error) => error.user_message(),
        }
    }
}

/// The structured record logged for a successful capture: the fix fields
/// plus the UTC-normalized scheduled end and capture timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptureRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
    pub altitude: Option<f64>,
    pub heading: Option<f64>,
    pub speed: Option<f64>,
    pub scheduled_end_utc: String,
    pub captured_at_utc: String,
}

impl CaptureRecord {
    /// The captured location as a map point.
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Resolved result of a capture.
pub type CaptureOutcome = std::result::Result<CaptureRecord, GeolocateError>;

/// A one-shot position capture in flight.
///
/// Validation happens before anything is spawned: a missing schedule or a
/// missing position source aborts with the corresponding [`Notice`] and no
/// platform call is made. Once issued the request is not cancelable; a
/// result arriving after the owner dropped the handle is discarded by the
/// worker's failed `send`.
pub struct CaptureRequest {
    rx: Receiver<CaptureOutcome>,
    resolved: bool,
}

impl CaptureRequest {
    /// Validates the inputs and, if both pass, requests a single fix on a
    /// background thread.
    pub fn begin(
        schedule: &ScheduleInput,
        source: Option<Arc<dyn PositionSource>>,
        options: GeolocateOptions,
    ) -> std::result::Result<Self, Notice> {
        let scheduled_end = schedule.normalized().ok_or(Notice::MissingSchedule)?;
        let source = source.ok_or(Notice::Unsupported)?;

        let scheduled_end_utc = format_utc(scheduled_end);
        log::debug!(
            "capture requested, scheduled end {} (local input {:?})",
            scheduled_end_utc,
            schedule.text()
        );

        let (tx, rx) = channel();
        thread::spawn(move || {
            let outcome = match source.current_position(&options) {
                Ok(fix) => {
                    let record = CaptureRecord {
                        latitude: fix.latitude,
                        longitude: fix.longitude,
                        accuracy: fix.accuracy,
                        altitude: fix.altitude,
                        heading: fix.heading,
                        speed: fix.speed,
                        scheduled_end_utc,
                        captured_at_utc: format_utc(fix.timestamp),
                    };
                    log::info!(
                        target: "pinmap::capture",
                        "captured position {}",
                        serde_json::to_string(&record).unwrap_or_default()
                    );
                    Ok(record)
                }
                Err(error) => {
                    log::warn!("position capture failed: {}", error);
                    Err(error)
                }
            };
            // Receiver gone means the view was torn down; discard.
            let _ = tx.send(outcome);
        });

        Ok(Self {
            rx,
            resolved: false,
        })
    }

    /// Returns the outcome once, as soon as the worker has delivered it.
    pub fn try_outcome(&mut self) -> Option<CaptureOutcome> {
        if self.resolved {
            return None;
        }
        match self.rx.try_recv() {
            Ok(outcome) => {
                self.resolved = true;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.resolved = true;
                None
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.resolved
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix, e.g.
/// `2025-08-17T03:00:00.000Z`.
fn format_utc(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geolocate::provider::{FixedPositionSource, PositionFix};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    /// A source that counts how often it is asked for a position.
    struct CountingSource {
        calls: Arc<AtomicUsize>,
        inner: FixedPositionSource,
    }

    impl PositionSource for CountingSource {
        fn current_position(
            &self,
            options: &GeolocateOptions,
        ) -> std::result::Result<PositionFix, GeolocateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.current_position(options)
        }
    }

    fn sample_fix() -> PositionFix {
        PositionFix {
            latitude: 35.6762,
            longitude: 139.6503,
            accuracy: 8.0,
            altitude: Some(40.0),
            heading: None,
            speed: None,
            timestamp: Utc.with_ymd_and_hms(2025, 8, 17, 3, 0, 0).unwrap(),
        }
    }

    fn schedule(text: &str) -> ScheduleInput {
        let mut input = ScheduleInput::new();
        *input.text_mut() = text.to_string();
        input
    }

    fn wait_for_outcome(request: &mut CaptureRequest) -> CaptureOutcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = request.try_outcome() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "capture did not resolve in time");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_format_utc_matches_iso_millis() {
        let dt = Utc.with_ymd_and_hms(2025, 8, 17, 3, 0, 0).unwrap();
        assert_eq!(format_utc(dt), "2025-08-17T03:00:00.000Z");
    }

    #[test]
    fn test_schedule_normalization() {
        assert!(schedule("").normalized().is_none());
        assert!(schedule("   ").normalized().is_none());
        assert!(schedule("tomorrow-ish").normalized().is_none());
        assert!(schedule("2025-08-17T12:00").normalized().is_some());
        assert!(schedule("2025-08-17T12:00:30").normalized().is_some());
    }

    #[test]
    fn test_missing_schedule_aborts_without_platform_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let source: Arc<dyn PositionSource> = Arc::new(CountingSource {
            calls: calls.clone(),
            inner: FixedPositionSource::ok(sample_fix()),
        });

        let result = CaptureRequest::begin(
            &ScheduleInput::new(),
            Some(source),
            GeolocateOptions::default(),
        );

        assert_eq!(result.err().unwrap(), Notice::MissingSchedule);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_source_aborts_with_unsupported() {
        let result = CaptureRequest::begin(
            &schedule("2025-08-17T12:00"),
            None,
            GeolocateOptions::default(),
        );
        assert_eq!(result.err().unwrap(), Notice::Unsupported);
    }

    #[test]
    fn test_successful_capture_produces_record() {
        let source: Arc<dyn PositionSource> = Arc::new(FixedPositionSource::ok(sample_fix()));
        let mut request = CaptureRequest::begin(
            &schedule("2025-08-17T12:00"),
            Some(source),
            GeolocateOptions::default(),
        )
        .unwrap();

        let record = wait_for_outcome(&mut request).unwrap();
        assert_eq!(record.latitude, 35.6762);
        assert_eq!(record.longitude, 139.6503);
        assert_eq!(record.altitude, Some(40.0));
        assert_eq!(record.captured_at_utc, "2025-08-17T03:00:00.000Z");
        assert_eq!(record.point(), GeoPoint::new(35.6762, 139.6503));
        // The scheduled end is normalized to UTC with the same format
        assert!(record.scheduled_end_utc.ends_with('Z'));
    }

    #[test]
    fn test_permission_denied_maps_to_exact_message() {
        let source: Arc<dyn PositionSource> =
            Arc::new(FixedPositionSource::err(GeolocateError::from_code(1, "")));
        let mut request = CaptureRequest::begin(
            &schedule("2025-08-17T12:00"),
            Some(source),
            GeolocateOptions::default(),
        )
        .unwrap();

        let error = wait_for_outcome(&mut request).unwrap_err();
        assert_eq!(
            Notice::Geolocate(error).message(),
            "Location permission is required (permission denied)."
        );
    }

    #[test]
    fn test_validation_order_checks_schedule_first() {
        // Neither schedule nor source: the schedule notice wins
        let result =
            CaptureRequest::begin(&ScheduleInput::new(), None, GeolocateOptions::default());
        assert_eq!(result.err().unwrap(), Notice::MissingSchedule);
    }
}
