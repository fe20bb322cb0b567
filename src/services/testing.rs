//! Stub providers that count how often the pipeline reaches them.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::errors::PipelineError;
use crate::models::recommendation::{GeocodedLocation, IrradianceSeries};
use crate::services::geocoder::Geocoder;
use crate::services::irradiance::IrradianceSource;

pub struct StubGeocoder {
    result: Result<GeocodedLocation, PipelineError>,
    calls: AtomicUsize,
    pub last_query: Mutex<Option<String>>,
}

impl StubGeocoder {
    pub fn found(latitude: f64, longitude: f64, display_name: &str) -> Self {
        Self::returning(Ok(GeocodedLocation { latitude, longitude, display_name: display_name.to_string() }))
    }

    pub fn returning(result: Result<GeocodedLocation, PipelineError>) -> Self {
        Self { result, calls: AtomicUsize::new(0), last_query: Mutex::new(None) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, query: &str) -> Result<GeocodedLocation, PipelineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.to_string());
        self.result.clone()
    }
}

pub struct StubIrradiance {
    result: Result<IrradianceSeries, PipelineError>,
    calls: AtomicUsize,
    pub last_point: Mutex<Option<(f64, f64)>>,
}

impl StubIrradiance {
    pub fn series(days: &[(&str, f64)]) -> Self {
        Self::returning(Ok(days.iter().map(|(d, v)| (d.to_string(), *v)).collect()))
    }

    pub fn returning(result: Result<IrradianceSeries, PipelineError>) -> Self {
        Self { result, calls: AtomicUsize::new(0), last_point: Mutex::new(None) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IrradianceSource for StubIrradiance {
    async fn daily_irradiance(&self, latitude: f64, longitude: f64) -> Result<IrradianceSeries, PipelineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_point.lock().unwrap() = Some((latitude, longitude));
        self.result.clone()
    }
}

/// Serves `app` on an ephemeral local port and returns its address.
pub async fn serve(app: axum::Router) -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// A fake provider answering every path with `status` and `body`, recording each raw query string.
pub fn recording_provider(
    status: axum::http::StatusCode,
    body: &'static str,
) -> (axum::Router, std::sync::Arc<Mutex<Vec<String>>>) {
    let seen = std::sync::Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();
    let app = axum::Router::new().fallback(move |axum::extract::RawQuery(query): axum::extract::RawQuery| {
        let log = log.clone();
        async move {
            log.lock().unwrap().push(query.unwrap_or_default());
            (status, body)
        }
    });
    (app, seen)
}
