//! Gesture-driven neon backdrop
//!
//! A fullscreen animated pattern renders continuously; hand-gesture
//! predictions from an external classifier (and the arrow keys) rotate
//! through a shuffled set of color themes.

mod gpu;

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use neon_backdrop::controller::ThemeController;
use neon_backdrop::scheduler::Scheduler;
use neon_backdrop::{Rng, Viewport};
use neon_config::Config;
use neon_gesture::classifier::HttpClassifier;
use neon_gesture::gesture::{Gesture, emoji_for};
use neon_gesture::poller::{NullFrameSource, Poller};
use neon_gesture::wire::Prediction;
use neon_theme::{ThemeRegistry, builtin_themes};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use gpu::Gpu;

struct App {
    config: Config,
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    controller: ThemeController,
    scene: vello::Scene,
    poller: Option<Poller>,
    predictions: Option<Receiver<Prediction>>,
}

impl App {
    fn new(config: Config) -> Self {
        let seed = config
            .general
            .shuffle_seed
            .unwrap_or_else(|| Rng::from_entropy().next_u64());
        let registry = ThemeRegistry::shuffled(builtin_themes(), seed);
        let scheduler = Scheduler::new(Viewport::default());
        let controller = ThemeController::new(registry, scheduler);

        Self {
            config,
            window: None,
            gpu: None,
            controller,
            scene: vello::Scene::new(),
            poller: None,
            predictions: None,
        }
    }

    fn start_poller(&mut self) {
        let classifier = HttpClassifier::new(self.config.classifier.endpoint.clone());
        let period = Duration::from_millis(self.config.general.poll_interval_ms);
        match Poller::spawn(
            Box::new(NullFrameSource),
            Box::new(classifier),
            period,
            self.config.classifier.jpeg_quality,
        ) {
            Ok((poller, rx)) => {
                self.poller = Some(poller);
                self.predictions = Some(rx);
            }
            Err(e) => log::warn!("Gesture polling disabled: {e:#}"),
        }
    }

    /// Apply pending predictions from the polling thread
    ///
    /// Every swipe-labelled prediction dispatches, so a gesture held across
    /// consecutive polls keeps cycling themes at the polling cadence.
    fn drain_predictions(&mut self) {
        let Some(rx) = self.predictions.as_ref() else {
            return;
        };
        let pending: Vec<Prediction> = rx.try_iter().collect();

        for prediction in pending {
            self.handle_prediction(&prediction);
        }
    }

    fn handle_prediction(&mut self, prediction: &Prediction) {
        log::info!(
            "Gesture: {} {}",
            emoji_for(&prediction.label),
            prediction.label
        );
        match Gesture::from_label(&prediction.label) {
            Some(Gesture::SwipeLeft) => {
                self.controller.retreat();
            }
            Some(Gesture::SwipeRight) => {
                self.controller.advance();
            }
            None => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match Gpu::new(window.clone()) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => {
                log::error!("Failed to initialize GPU: {e:#}");
                event_loop.exit();
                return;
            }
        }

        let size = window.inner_size();
        self.controller
            .scheduler_mut()
            .resize(size.width as f64, size.height as f64);
        self.controller.apply_current();
        self.start_poller();

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(size.width, size.height);
                }
                // The active run keeps its state across the resize.
                self.controller
                    .scheduler_mut()
                    .resize(size.width as f64, size.height as f64);
            }

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match &event.logical_key {
                    Key::Named(NamedKey::ArrowLeft) => {
                        self.controller.retreat();
                    }
                    Key::Named(NamedKey::ArrowRight) => {
                        self.controller.advance();
                    }
                    Key::Named(NamedKey::Escape) => event_loop.exit(),
                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => {
                self.scene.reset();
                self.controller.scheduler_mut().tick(&mut self.scene);
                if let Some(gpu) = self.gpu.as_mut() {
                    if let Err(e) = gpu.render(&self.scene) {
                        log::warn!("Frame dropped: {e:#}");
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.drain_predictions();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(mut poller) = self.poller.take() {
            poller.stop();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,neon_gestures=info,neon_backdrop=info,neon_gesture=info,neon_theme=info,neon_config=info"),
    )
    .init();
    log::info!("Neon Gestures starting");

    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {e}");
        Config::default()
    });

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut App::new(config))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(label: &str) -> Prediction {
        Prediction {
            label: label.to_string(),
            score: Some(0.9),
        }
    }

    #[test]
    fn test_each_swipe_prediction_moves_one_theme() {
        let mut app = App::new(Config::default());
        let count = 10; // built-in theme count
        assert_eq!(app.controller.index(), 0);

        // A held gesture repeats in consecutive polls; every repeat cycles.
        app.handle_prediction(&prediction("Swipe Right"));
        app.handle_prediction(&prediction("Swipe Right"));
        app.handle_prediction(&prediction("Swipe Right"));
        assert_eq!(app.controller.index(), 3 % count);

        app.handle_prediction(&prediction("Swipe Left"));
        app.handle_prediction(&prediction("Swipe Left"));
        assert_eq!(app.controller.index(), 1 % count);
    }

    #[test]
    fn test_non_swipe_predictions_leave_index_alone() {
        let mut app = App::new(Config::default());
        app.handle_prediction(&prediction("Open Palm"));
        app.handle_prediction(&prediction("No Hand"));
        app.handle_prediction(&prediction("Thumbs Up"));
        assert_eq!(app.controller.index(), 0);
    }
}
