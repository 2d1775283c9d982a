//! Gesture classification boundary
//!
//! Camera frames are mirrored, JPEG-encoded into a data URL, and posted to
//! an external classifier service on a fixed period. The service is the
//! sole authority on labels; this crate only transports frames out and
//! predictions back. Classification failures are logged and swallowed so
//! the polling cadence never stalls.

pub mod classifier;
pub mod gesture;
pub mod poller;
pub mod snapshot;
pub mod wire;

pub use classifier::{Classifier, HttpClassifier};
pub use gesture::Gesture;
pub use poller::{FrameSource, NullFrameSource, Poller};
pub use snapshot::Frame;
pub use wire::{ClassifyRequest, ClassifyResponse, Prediction};
