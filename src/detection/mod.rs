//! Detection frame processing
//!
//! Turns the detector's per-frame output into labelled overlays:
//! - picks each detection's most confident category above the threshold
//! - throttles frames that arrive too quickly
//! - resolves the display translation through the [`TranslationService`]
//!
//! Remote translations complete on the runtime and are applied to the board
//! on the next [`DetectionPipeline::drain_remote`] call.

use crate::core::{Color, DetectionConfig, Detection, Result, TargetLanguage};
use crate::overlay::{OverlayId, OverlayMetadata, OverlayRenderer};
use crate::translate::{Resolution, TranslationService};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Overlay colours, cycled by detection index
pub const PALETTE: [Color; 9] = [
    Color::rgb(0.53, 0.81, 0.92),
    Color::rgb(0.18, 0.55, 0.34),
    Color::rgb(1.0, 0.92, 0.23),
    Color::rgb(1.0, 0.0, 1.0),
    Color::rgb(0.0, 1.0, 1.0),
    Color::rgb(1.0, 1.0, 1.0),
    Color::rgb(0.94, 1.0, 1.0),
    Color::rgb(1.0, 0.5, 0.31),
    Color::rgb(0.2, 0.8, 0.2),
];

/// Pause/resume control used by focus handling
pub trait DetectionControl {
    /// Stop processing frames but keep the current overlays
    fn pause_only(&mut self);

    fn enable(&mut self);

    /// Stop processing frames and clear the overlays
    fn disable(&mut self);

    fn is_paused(&self) -> bool;
}

/// What happened to a submitted frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Paused,
    Throttled,
    /// Number of overlays drawn
    Rendered(usize),
}

/// A completed remote translation
#[derive(Debug)]
struct RemoteResult {
    generation: u64,
    overlay: OverlayId,
    result: Result<String>,
}

pub struct DetectionPipeline {
    config: DetectionConfig,
    translations: TranslationService,
    language: TargetLanguage,
    renderer: Rc<RefCell<dyn OverlayRenderer>>,
    paused: bool,
    /// Set by `pause_for`; frames at or after it resume detection
    paused_until: Option<Instant>,
    last_update: Option<Instant>,
    /// Bumped on every clear so late remote results skip recycled overlays
    generation: u64,
    remote_tx: UnboundedSender<RemoteResult>,
    remote_rx: UnboundedReceiver<RemoteResult>,
}

impl DetectionPipeline {
    pub fn new(
        config: &DetectionConfig,
        translations: TranslationService,
        language: TargetLanguage,
        renderer: Rc<RefCell<dyn OverlayRenderer>>,
    ) -> Self {
        let (remote_tx, remote_rx) = unbounded_channel();
        Self {
            config: config.clone(),
            translations,
            language,
            renderer,
            paused: false,
            paused_until: None,
            last_update: None,
            generation: 0,
            remote_tx,
            remote_rx,
        }
    }

    /// Language used for overlays drawn from now on
    pub fn set_language(&mut self, language: TargetLanguage) {
        self.language = language;
    }

    pub fn language(&self) -> TargetLanguage {
        self.language
    }

    pub fn translations(&self) -> &TranslationService {
        &self.translations
    }

    pub fn process_frame(&mut self, detections: &[Detection]) -> FrameOutcome {
        self.process_frame_at(detections, Instant::now())
    }

    pub fn process_frame_at(&mut self, detections: &[Detection], now: Instant) -> FrameOutcome {
        if self.paused {
            match self.paused_until {
                Some(until) if now >= until => self.enable(),
                _ => return FrameOutcome::Paused,
            }
        }

        let min_interval = Duration::from_millis(self.config.min_time_between_updates_ms);
        if let Some(last) = self.last_update {
            if now.saturating_duration_since(last) < min_interval {
                return FrameOutcome::Throttled;
            }
        }
        self.last_update = Some(now);

        self.clear_overlays();

        let mut rendered = 0;
        for (i, detection) in detections.iter().enumerate() {
            let Some(best) = detection.best_categorization(self.config.probability_threshold) else {
                continue;
            };

            let primary = format!("{}: {:.2}", best.category, best.confidence);
            let color = PALETTE[i % PALETTE.len()];
            let resolution = self.translations.resolve(&best.category, self.language);

            let translation = match &resolution {
                Resolution::Ready(text) => text.clone(),
                _ => String::new(),
            };
            let metadata = OverlayMetadata {
                category: best.category.clone(),
                translation: translation.clone(),
                confidence: best.confidence,
                screen_position: detection.rect.position(),
            };

            let secondary = (!translation.is_empty()).then_some(translation.as_str());
            let id = self
                .renderer
                .borrow_mut()
                .render_overlay(detection.rect, color, &primary, secondary, metadata);
            rendered += 1;

            if resolution == Resolution::Remote {
                self.request_remote(id, &best.category);
            }
        }

        log::debug!("[DetectionPipeline] Rendered {} of {} detections", rendered, detections.len());
        FrameOutcome::Rendered(rendered)
    }

    /// Apply remote translations that finished since the last call.
    /// Returns how many were applied.
    pub fn drain_remote(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(result) = self.remote_rx.try_recv() {
            if self.apply_remote(result) {
                applied += 1;
            }
        }
        applied
    }

    fn apply_remote(&mut self, remote: RemoteResult) -> bool {
        if remote.generation != self.generation {
            log::debug!("[DetectionPipeline] Dropping stale translation for overlay #{}", remote.overlay);
            return false;
        }

        match remote.result {
            Ok(text) => {
                self.renderer.borrow_mut().set_translation(remote.overlay, &text);
                true
            }
            Err(e) => {
                log::warn!("[DetectionPipeline] Translation failed: {}", e);
                false
            }
        }
    }

    fn request_remote(&self, overlay: OverlayId, category: &str) {
        let Some(remote) = self.translations.remote() else {
            return;
        };

        let tx = self.remote_tx.clone();
        let generation = self.generation;
        remote.spawn_translate(category, self.language, move |result| {
            let _ = tx.send(RemoteResult { generation, overlay, result });
        });
    }

    fn clear_overlays(&mut self) {
        self.generation += 1;
        self.renderer.borrow_mut().clear_all();
    }

    /// Pause for `duration` starting at `now`, keeping the overlays.
    /// Ignored while already paused.
    pub fn pause_for(&mut self, duration: Duration, now: Instant) {
        if self.paused {
            return;
        }
        self.paused = true;
        self.paused_until = Some(now + duration);
        log::info!("[DetectionPipeline] Object detection paused for {:.1} seconds", duration.as_secs_f32());
    }

    /// Flip between running and disabled (disabling clears the overlays)
    pub fn toggle(&mut self) {
        if self.paused {
            self.enable();
        } else {
            self.disable();
        }
    }
}

impl DetectionControl for DetectionPipeline {
    fn pause_only(&mut self) {
        self.paused = true;
        self.paused_until = None;
        log::info!("[DetectionPipeline] Object detection paused (overlays preserved)");
    }

    fn enable(&mut self) {
        self.paused = false;
        self.paused_until = None;
        log::info!("[DetectionPipeline] Object detection enabled");
    }

    fn disable(&mut self) {
        self.paused = true;
        self.paused_until = None;
        self.clear_overlays();
        log::info!("[DetectionPipeline] Object detection disabled");
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Categorization, Error, ScreenRect};
    use crate::i18n::TranslationTable;
    use crate::overlay::OverlayBoard;

    fn pipeline(service: TranslationService) -> (DetectionPipeline, Rc<RefCell<OverlayBoard>>) {
        let board = Rc::new(RefCell::new(OverlayBoard::new()));
        let pipeline = DetectionPipeline::new(
            &DetectionConfig::default(),
            service,
            TargetLanguage::Italian,
            board.clone(),
        );
        (pipeline, board)
    }

    fn offline() -> TranslationService {
        let mut table = TranslationTable::new();
        table.insert("cat", "Cat", "Chat", "Katze", "Gatto");
        table.insert("chair", "Chair", "Chaise", "Stuhl", "Sedia");
        TranslationService::new(Some(table), None)
    }

    fn detection(labels: &[(&str, f32)]) -> Detection {
        Detection::new(
            ScreenRect::new(10.0, 20.0, 100.0, 100.0),
            labels.iter().map(|(c, p)| Categorization::new(c, *p)).collect(),
        )
    }

    #[test]
    fn test_best_category_above_threshold() {
        let (mut pipeline, board) = pipeline(offline());
        let frame = vec![
            detection(&[("chair", 0.65), ("cat", 0.91)]),
            detection(&[("dog", 0.3)]),
            detection(&[("fire_hydrant", 0.6)]),
        ];

        assert_eq!(pipeline.process_frame(&frame), FrameOutcome::Rendered(2));

        let board = board.borrow();
        let overlays: Vec<_> = board.active().collect();
        assert_eq!(overlays[0].display_text(), "cat: 0.91\nGatto");
        assert_eq!(overlays[0].color, PALETTE[0]);
        assert_eq!(overlays[1].metadata.translation, "Fire hydrant");
        assert_eq!(overlays[1].color, PALETTE[2]);
    }

    #[test]
    fn test_throttle_and_pause() {
        let (mut pipeline, board) = pipeline(offline());
        let frame = vec![detection(&[("cat", 0.9)])];
        let start = Instant::now();

        assert_eq!(pipeline.process_frame_at(&frame, start), FrameOutcome::Rendered(1));
        assert_eq!(
            pipeline.process_frame_at(&frame, start + Duration::from_millis(100)),
            FrameOutcome::Throttled
        );

        pipeline.pause_only();
        assert_eq!(
            pipeline.process_frame_at(&frame, start + Duration::from_millis(400)),
            FrameOutcome::Paused
        );
        assert_eq!(board.borrow().active().count(), 1);

        pipeline.disable();
        assert_eq!(board.borrow().active().count(), 0);

        pipeline.toggle();
        assert!(!pipeline.is_paused());
        assert_eq!(
            pipeline.process_frame_at(&frame, start + Duration::from_millis(600)),
            FrameOutcome::Rendered(1)
        );
    }

    #[test]
    fn test_timed_pause_resumes_on_later_frame() {
        let (mut pipeline, board) = pipeline(offline());
        let frame = vec![detection(&[("cat", 0.9)])];
        let start = Instant::now();

        pipeline.process_frame_at(&frame, start);
        pipeline.pause_for(Duration::from_secs(2), start);
        // A second timed pause does not extend the first
        pipeline.pause_for(Duration::from_secs(10), start);

        assert_eq!(
            pipeline.process_frame_at(&frame, start + Duration::from_secs(1)),
            FrameOutcome::Paused
        );
        assert_eq!(board.borrow().active().count(), 1);
        assert_eq!(
            pipeline.process_frame_at(&frame, start + Duration::from_secs(2)),
            FrameOutcome::Rendered(1)
        );
        assert!(!pipeline.is_paused());
    }

    #[test]
    fn test_manual_pause_cancels_timer() {
        let (mut pipeline, _board) = pipeline(offline());
        let frame = vec![detection(&[("cat", 0.9)])];
        let start = Instant::now();

        pipeline.pause_for(Duration::from_secs(1), start);
        pipeline.enable();
        pipeline.pause_only();
        assert_eq!(
            pipeline.process_frame_at(&frame, start + Duration::from_secs(5)),
            FrameOutcome::Paused
        );
    }

    #[test]
    fn test_language_change_applies_to_new_frames() {
        let (mut pipeline, board) = pipeline(offline());
        pipeline.set_language(TargetLanguage::German);
        pipeline.process_frame(&[detection(&[("chair", 0.8)])]);
        assert_eq!(board.borrow().get(0).unwrap().metadata.translation, "Stuhl");
    }

    #[test]
    fn test_no_source_draws_without_translation() {
        let (mut pipeline, board) = pipeline(TranslationService::new(None, None));
        pipeline.process_frame(&[detection(&[("cat", 0.8)])]);
        let board = board.borrow();
        let overlay = board.get(0).unwrap();
        assert_eq!(overlay.secondary_text, None);
        assert_eq!(overlay.display_text(), "cat: 0.80");
    }

    #[test]
    fn test_remote_results_apply_to_current_generation_only() {
        let (mut pipeline, board) = pipeline(TranslationService::new(None, None));
        pipeline.process_frame(&[detection(&[("cat", 0.8)])]);
        let generation = pipeline.generation;

        pipeline
            .remote_tx
            .send(RemoteResult { generation, overlay: 0, result: Ok("Gatto".into()) })
            .unwrap();
        pipeline
            .remote_tx
            .send(RemoteResult {
                generation,
                overlay: 0,
                result: Err(Error::Translation("quota exceeded".into())),
            })
            .unwrap();
        pipeline
            .remote_tx
            .send(RemoteResult { generation: generation - 1, overlay: 0, result: Ok("Vecchio".into()) })
            .unwrap();

        assert_eq!(pipeline.drain_remote(), 1);
        assert_eq!(board.borrow().get(0).unwrap().display_text(), "cat: 0.80\nGatto");
    }
}
