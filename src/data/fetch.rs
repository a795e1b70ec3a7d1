use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use once_cell::sync::Lazy;
use reqwest::blocking::Client;

use crate::core::geo::GeoPoint;
use crate::data::points;
use crate::{Error, Result};

/// Shared blocking HTTP client with a custom User-Agent. Building the client
/// once avoids the cost of TLS and connection pool setup for every request.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("pinmap/0.1 (+https://github.com/example/pinmap)")
        .build()
        .expect("failed to build reqwest blocking client")
});

/// Resolved result of a points fetch.
pub type FetchOutcome = Result<Vec<GeoPoint>>;

/// One-shot background fetch of the point list.
///
/// The request runs on a detached thread and reports back over an `mpsc`
/// channel; the owning view polls [`try_outcome`](Self::try_outcome) once per
/// frame. Exactly one attempt is made — the endpoint is local and a failed
/// fetch degrades to an empty marker set with a logged diagnostic, not a
/// retry loop.
///
/// Dropping the request closes the channel, so a result arriving after the
/// view is gone is discarded by the worker's failed `send`; nothing can
/// write into a torn-down view.
pub struct PointsRequest {
    rx: Receiver<FetchOutcome>,
    resolved: bool,
}

impl PointsRequest {
    /// Issues `GET <url>` on a background thread and returns the pending
    /// request handle.
    pub fn spawn(url: impl Into<String>) -> Self {
        let url = url.into();
        let (tx, rx) = channel();

        thread::spawn(move || {
            log::debug!("fetching points from {}", url);
            let outcome = fetch_points(&url);
            match &outcome {
                Ok(points) => log::info!("fetched {} points from {}", points.len(), url),
                Err(e) => log::warn!("points fetch from {} failed: {}", url, e),
            }
            // Receiver dropped means the view was torn down; discard.
            let _ = tx.send(outcome);
        });

        Self {
            rx,
            resolved: false,
        }
    }

    /// Returns the outcome once, as soon as the worker has delivered it.
    /// Before that, and forever after the first delivery, returns `None`.
    pub fn try_outcome(&mut self) -> Option<FetchOutcome> {
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

    /// True while the worker has not reported back.
    pub fn is_pending(&self) -> bool {
        !self.resolved
    }
}

fn fetch_points(url: &str) -> FetchOutcome {
    let resp = HTTP_CLIENT.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }
    let body = resp.bytes()?;
    points::decode(&body)
}
