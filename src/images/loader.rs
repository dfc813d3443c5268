use std::{
    sync::{
        Arc, Mutex,
        mpsc::{Receiver, Sender},
    },
    thread,
    time::{Duration, Instant},
};

use egui::ColorImage;

use super::decode::{FULL_SIZE_MAX_EDGE, decode_image};
use crate::content::ContentSource;

/// Which size class an image is decoded for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Thumbnail,
    FullSize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageJob {
    pub url: String,
    pub kind: ImageKind,
}

#[derive(Debug)]
pub struct ImageResult {
    pub url: String,
    pub kind: ImageKind,
    pub result: Result<ColorImage, String>,
    pub elapsed: Duration,
}

/// Start `workers` threads that download and decode image jobs.
///
/// Workers exit once the returned sender is dropped.
pub fn spawn_image_loader(
    source: Arc<dyn ContentSource>,
    thumbnail_px: u32,
    workers: usize,
) -> (Sender<ImageJob>, Receiver<ImageResult>) {
    let (tx, rx) = std::sync::mpsc::channel::<ImageJob>();
    let (result_tx, result_rx) = std::sync::mpsc::channel::<ImageResult>();
    let rx = Arc::new(Mutex::new(rx));
    for index in 0..workers.max(1) {
        let rx = Arc::clone(&rx);
        let result_tx = result_tx.clone();
        let source = Arc::clone(&source);
        let spawned = thread::Builder::new()
            .name(format!("folio-image-{index}"))
            .spawn(move || {
                loop {
                    let job = match rx.lock() {
                        Ok(guard) => guard.recv(),
                        Err(_) => break,
                    };
                    let Ok(job) = job else {
                        break;
                    };
                    let start = Instant::now();
                    let result = load_image(source.as_ref(), &job, thumbnail_px);
                    if let Err(err) = &result {
                        tracing::warn!("Image {} failed: {err}", job.url);
                    }
                    let sent = result_tx.send(ImageResult {
                        url: job.url,
                        kind: job.kind,
                        result,
                        elapsed: start.elapsed(),
                    });
                    if sent.is_err() {
                        break;
                    }
                }
            });
        if let Err(err) = spawned {
            tracing::error!("Failed to start image worker {index}: {err}");
        }
    }
    (tx, result_rx)
}

fn load_image(
    source: &dyn ContentSource,
    job: &ImageJob,
    thumbnail_px: u32,
) -> Result<ColorImage, String> {
    let bytes = source
        .fetch_image_bytes(&job.url)
        .map_err(|err| err.to_string())?;
    let max_edge = match job.kind {
        ImageKind::Thumbnail => thumbnail_px,
        ImageKind::FullSize => FULL_SIZE_MAX_EDGE,
    };
    decode_image(&bytes, max_edge).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContentSettings;
    use crate::content::ContentClient;
    use crate::images::decode::encode_test_png;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    fn http_source() -> Arc<dyn ContentSource> {
        Arc::new(ContentClient::new(ContentSettings::default()))
    }

    fn serve_png_once(png: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let header = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    png.len()
                );
                let _ = stream.write_all(header.as_bytes());
                let _ = stream.write_all(&png);
            }
        });
        format!("http://{addr}/thumb.png")
    }

    #[test]
    fn downloads_and_decodes_thumbnails() {
        let url = serve_png_once(encode_test_png(640, 640));
        let (tx, rx) = spawn_image_loader(http_source(), 64, 2);
        tx.send(ImageJob {
            url: url.clone(),
            kind: ImageKind::Thumbnail,
        })
        .unwrap();
        let result = rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert_eq!(result.url, url);
        assert_eq!(result.kind, ImageKind::Thumbnail);
        assert_eq!(result.result.unwrap().size, [64, 64]);
    }

    #[test]
    fn reports_invalid_urls_as_errors() {
        let (tx, rx) = spawn_image_loader(http_source(), 64, 1);
        tx.send(ImageJob {
            url: "not a url".into(),
            kind: ImageKind::FullSize,
        })
        .unwrap();
        let result = rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert!(result.result.unwrap_err().contains("Invalid URL"));
    }
}
