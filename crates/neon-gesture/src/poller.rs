//! Fixed-period classification poller
//!
//! A background thread captures a frame, mirrors and encodes it, and posts
//! it to the classifier on a fixed cadence. The cadence is uncoordinated
//! with the response: a slow request delays only its own poll, and the
//! timer realigns to the next absolute deadline afterwards. Any failure in
//! the capture-encode-classify chain is logged and swallowed.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::classifier::Classifier;
use crate::snapshot::{self, Frame};
use crate::wire::Prediction;

/// Default polling period
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(140);

/// Produces camera frames for the poller
pub trait FrameSource: Send {
    /// Open the capture device
    fn start(&mut self) -> anyhow::Result<()>;

    /// Release the capture device
    fn stop(&mut self);

    /// Latest frame, or `None` when no frame is ready yet
    fn frame(&mut self) -> Option<Frame>;
}

/// Frame source that never yields a frame
///
/// Stands in when no capture backend is wired up; the poller runs its
/// cadence but never issues a request.
pub struct NullFrameSource;

impl FrameSource for NullFrameSource {
    fn start(&mut self) -> anyhow::Result<()> {
        log::warn!("No capture backend configured; gesture input is inactive");
        Ok(())
    }

    fn stop(&mut self) {}

    fn frame(&mut self) -> Option<Frame> {
        None
    }
}

/// Handle to the background polling thread
pub struct Poller {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// Start polling and return the prediction channel
    ///
    /// Fails only if the frame source cannot start; everything after that
    /// is reported through logs and the returned receiver.
    pub fn spawn(
        mut source: Box<dyn FrameSource>,
        classifier: Box<dyn Classifier>,
        period: Duration,
        jpeg_quality: u8,
    ) -> anyhow::Result<(Self, Receiver<Prediction>)> {
        source.start()?;

        let stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = channel();

        let thread_stop = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("gesture-poller".to_string())
            .spawn(move || {
                run_loop(&mut *source, &*classifier, period, jpeg_quality, &thread_stop, &tx);
                source.stop();
            })?;

        Ok((
            Self {
                stop,
                handle: Some(handle),
            },
            rx,
        ))
    }

    /// Stop the polling thread and wait for it to exit
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop(
    source: &mut dyn FrameSource,
    classifier: &dyn Classifier,
    period: Duration,
    jpeg_quality: u8,
    stop: &AtomicBool,
    tx: &Sender<Prediction>,
) {
    let mut next = Instant::now() + period;
    while !stop.load(Ordering::Relaxed) {
        let now = Instant::now();
        if now < next {
            thread::sleep(next - now);
        }
        next += period;
        if stop.load(Ordering::Relaxed) {
            break;
        }

        let Some(frame) = source.frame() else {
            continue;
        };

        match classify_frame(&frame, classifier, jpeg_quality) {
            Ok(prediction) => {
                log::trace!(
                    "Prediction: {} ({:?})",
                    prediction.label,
                    prediction.score
                );
                if tx.send(prediction).is_err() {
                    // Receiver dropped; the embedding is shutting down.
                    break;
                }
            }
            Err(e) => log::warn!("Classification failed: {e:#}"),
        }
    }
}

fn classify_frame(
    frame: &Frame,
    classifier: &dyn Classifier,
    jpeg_quality: u8,
) -> anyhow::Result<Prediction> {
    let url = snapshot::to_jpeg_data_url(&frame.mirrored(), jpeg_quality)?;
    classifier.classify(&url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    struct SolidSource;

    impl FrameSource for SolidSource {
        fn start(&mut self) -> anyhow::Result<()> {
            Ok(())
        }
        fn stop(&mut self) {}
        fn frame(&mut self) -> Option<Frame> {
            Some(Frame::new(8, 8, vec![90; 8 * 8 * 3]))
        }
    }

    struct FailingSource;

    impl FrameSource for FailingSource {
        fn start(&mut self) -> anyhow::Result<()> {
            anyhow::bail!("camera unavailable")
        }
        fn stop(&mut self) {}
        fn frame(&mut self) -> Option<Frame> {
            None
        }
    }

    struct ScriptedClassifier {
        calls: Arc<AtomicUsize>,
        results: Mutex<Vec<anyhow::Result<Prediction>>>,
    }

    impl Classifier for ScriptedClassifier {
        fn classify(&self, _image: &str) -> anyhow::Result<Prediction> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.results.lock().unwrap().pop().unwrap_or_else(|| {
                Ok(Prediction {
                    label: "Open Palm".to_string(),
                    score: Some(0.9),
                })
            })
        }
    }

    #[test]
    fn test_poller_delivers_predictions() {
        let calls = Arc::new(AtomicUsize::new(0));
        let classifier = ScriptedClassifier {
            calls: Arc::clone(&calls),
            results: Mutex::new(Vec::new()),
        };
        let (mut poller, rx) = Poller::spawn(
            Box::new(SolidSource),
            Box::new(classifier),
            Duration::from_millis(5),
            85,
        )
        .unwrap();

        let first = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(first.label, "Open Palm");
        poller.stop();
        assert!(calls.load(Ordering::SeqCst) >= 1);
    }

    #[test]
    fn test_classifier_errors_are_swallowed() {
        let calls = Arc::new(AtomicUsize::new(0));
        // Popped back to front: two errors first, then a success.
        let classifier = ScriptedClassifier {
            calls: Arc::clone(&calls),
            results: Mutex::new(vec![
                Ok(Prediction {
                    label: "Peace".to_string(),
                    score: Some(0.7),
                }),
                Err(anyhow::anyhow!("decode failure")),
                Err(anyhow::anyhow!("connection refused")),
            ]),
        };
        let (mut poller, rx) = Poller::spawn(
            Box::new(SolidSource),
            Box::new(classifier),
            Duration::from_millis(5),
            85,
        )
        .unwrap();

        // The loop must ride through both failures and deliver the success.
        let delivered = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(delivered.label, "Peace");
        poller.stop();
        assert!(calls.load(Ordering::SeqCst) >= 3);
    }

    #[test]
    fn test_null_source_never_classifies() {
        let calls = Arc::new(AtomicUsize::new(0));
        let classifier = ScriptedClassifier {
            calls: Arc::clone(&calls),
            results: Mutex::new(Vec::new()),
        };
        let (mut poller, rx) = Poller::spawn(
            Box::new(NullFrameSource),
            Box::new(classifier),
            Duration::from_millis(2),
            85,
        )
        .unwrap();

        thread::sleep(Duration::from_millis(30));
        poller.stop();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_failed_source_start_aborts_spawn() {
        let classifier = ScriptedClassifier {
            calls: Arc::new(AtomicUsize::new(0)),
            results: Mutex::new(Vec::new()),
        };
        let result = Poller::spawn(
            Box::new(FailingSource),
            Box::new(classifier),
            DEFAULT_PERIOD,
            85,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_stop_joins_promptly() {
        let classifier = ScriptedClassifier {
            calls: Arc::new(AtomicUsize::new(0)),
            results: Mutex::new(Vec::new()),
        };
        let (mut poller, _rx) = Poller::spawn(
            Box::new(SolidSource),
            Box::new(classifier),
            Duration::from_millis(5),
            85,
        )
        .unwrap();
        let started = Instant::now();
        poller.stop();
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
