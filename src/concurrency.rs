use std::time::Duration;

use tokio::{sync::Mutex, task::JoinSet, time::sleep};
use tracing::{debug, info};

pub async fn list_photos(gallery: &str) -> Vec<String> {
    debug!("Listing photos in {}", gallery);
    ["John", "Mary", "Steven"].map(String::from).to_vec()
}

pub async fn download_photo(name: String, delay: Duration) -> String {
    debug!("Start photo downloading: {}", name);
    sleep(delay).await;
    debug!("Photo downloaded: {}", name);
    name
}

pub async fn download_document(delay: Duration) -> String {
    sleep(delay).await;
    "Document fetch completed.".to_string()
}

/// Downloads every photo on its own task and returns the names sorted,
/// since tasks may finish in any order.
pub async fn download_in_parallel(
    names: Vec<String>,
    delay: Duration,
) -> anyhow::Result<Vec<String>> {
    let mut set = JoinSet::new();
    for name in names {
        set.spawn(download_photo(name, delay));
    }

    let mut photos = Vec::with_capacity(set.len());
    while let Some(res) = set.join_next().await {
        photos.push(res?);
    }
    photos.sort();

    info!("Downloaded {} photos", photos.len());
    Ok(photos)
}

#[derive(Debug)]
struct Readings {
    measurements: Vec<i32>,
    max: i32,
}

/// Temperature readings that many tasks can update through a shared handle.
#[derive(Debug)]
pub struct TemperatureLogger {
    label: String,
    readings: Mutex<Readings>,
}

impl TemperatureLogger {
    pub fn new(label: impl Into<String>, measurement: i32) -> Self {
        Self {
            label: label.into(),
            readings: Mutex::new(Readings {
                measurements: vec![measurement],
                max: measurement,
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub async fn update(&self, measurement: i32) {
        let mut readings = self.readings.lock().await;
        readings.measurements.push(measurement);
        if measurement > readings.max {
            readings.max = measurement;
        }
    }

    pub async fn max(&self) -> i32 {
        self.readings.lock().await.max
    }

    pub async fn measurements(&self) -> Vec<i32> {
        self.readings.lock().await.measurements.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_parallel_downloads_return_every_photo() {
        let names = list_photos("Summer vacations").await;
        let photos = download_in_parallel(names, Duration::ZERO).await.unwrap();
        assert_eq!(photos, vec!["John", "Mary", "Steven"]);
    }

    #[tokio::test]
    async fn test_photo_and_document_join() {
        let (photo, document) = tokio::join!(
            download_photo("John".into(), Duration::from_millis(5)),
            download_document(Duration::from_millis(1)),
        );
        assert_eq!(photo, "John");
        assert_eq!(document, "Document fetch completed.");
    }

    #[tokio::test]
    async fn test_logger_tracks_max_across_tasks() {
        let logger = Arc::new(TemperatureLogger::new("Outdoors", 25));
        assert_eq!(logger.max().await, 25);

        let mut set = JoinSet::new();
        for reading in [18, 31, 27, 40, 12] {
            let logger = Arc::clone(&logger);
            set.spawn(async move { logger.update(reading).await });
        }
        while let Some(res) = set.join_next().await {
            res.unwrap();
        }

        assert_eq!(logger.label(), "Outdoors");
        assert_eq!(logger.max().await, 40);

        let mut measurements = logger.measurements().await;
        measurements.sort();
        assert_eq!(measurements, vec![12, 18, 25, 27, 31, 40]);
    }

    #[tokio::test]
    async fn test_lower_reading_keeps_max() {
        let logger = TemperatureLogger::new("Indoors", 21);
        logger.update(19).await;
        assert_eq!(logger.max().await, 21);
        assert_eq!(logger.measurements().await, vec![21, 19]);
    }
}
