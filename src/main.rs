//! LinguaAR - interactive console session
//!
//! Drives the translation, focus and speech components from typed commands
//! standing in for the camera feed and touch input.

use lingua_ar_lib::core::{Categorization, Config, Detection, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ScreenRect, TargetLanguage};
use lingua_ar_lib::detection::{DetectionControl, DetectionPipeline, FrameOutcome};
use lingua_ar_lib::focus::{FocusStateMachine, FocusTransition};
use lingua_ar_lib::i18n::{LanguageSettings, SentenceDatabase, TranslationTable};
use lingua_ar_lib::menu::ActionMenu;
use lingua_ar_lib::overlay::{OverlayBoard, SelectionState};
use lingua_ar_lib::translate::TranslationService;
use lingua_ar_lib::tts::TtsManager;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

const HELP: &str = "\
Commands:
  detect <category>:<confidence> ...   submit a detection frame
  list                                 show overlays
  tap <id>                             tap an overlay (tap again to deselect)
  unfocus                              cancel the current focus
  menu                                 show the action menu
  speak                                pronounce the focused translation
  examples                             example sentences for the focused object
  lang [name]                          show or change the target language
  pause [seconds] | resume | toggle    control detection
  quit";

/// Every component of one session, wired together
struct Session {
    settings: Rc<RefCell<LanguageSettings>>,
    board: Rc<RefCell<OverlayBoard>>,
    pipeline: Rc<RefCell<DetectionPipeline>>,
    tts: Rc<RefCell<TtsManager>>,
    machine: FocusStateMachine,
    menu: ActionMenu,
    sentences: SentenceDatabase,
}

impl Session {
    fn new(config: &Config, runtime: &tokio::runtime::Runtime) -> Self {
        let store: Box<dyn PreferenceStore> = match FilePreferenceStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("Failed to open preferences, language will not persist: {}", e);
                Box::new(MemoryPreferenceStore::new())
            }
        };
        let settings = Rc::new(RefCell::new(LanguageSettings::load(store)));
        let language = settings.borrow().current();

        let board = Rc::new(RefCell::new(OverlayBoard::new()));
        let translations = TranslationService::from_config(
            &config.translation,
            TranslationTable::builtin(),
            Some(runtime.handle().clone()),
        );
        let pipeline = Rc::new(RefCell::new(DetectionPipeline::new(
            &config.detection,
            translations,
            language,
            board.clone(),
        )));
        let tts = Rc::new(RefCell::new(TtsManager::detect(&config.speech, language)));

        {
            let pipeline = Rc::clone(&pipeline);
            let tts = Rc::clone(&tts);
            settings.borrow_mut().subscribe(move |language| {
                pipeline.borrow_mut().set_language(*language);
                tts.borrow_mut().set_language(*language);
            });
        }

        let mut machine = FocusStateMachine::new(board.clone())
            .with_detection(pipeline.clone(), config.detection.pause_on_focus);
        TtsManager::attach_auto_play(&tts, &mut machine);
        let menu = ActionMenu::attach(&config.menu, &mut machine);

        let sentences = SentenceDatabase::bundled().unwrap_or_else(|e| {
            log::warn!("Failed to load example sentences: {}", e);
            SentenceDatabase::new()
        });

        Self {
            settings,
            board,
            pipeline,
            tts,
            machine,
            menu,
            sentences,
        }
    }

    /// Returns false when the session should end
    fn handle(&mut self, line: &str) -> bool {
        self.pipeline.borrow_mut().drain_remote();

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return true;
        };
        let args: Vec<&str> = words.collect();

        match command {
            "detect" => self.detect(&args),
            "list" => self.list(),
            "tap" => match args.first().and_then(|a| a.parse().ok()) {
                Some(id) => report(self.machine.handle_tap(id)),
                None => println!("usage: tap <id>"),
            },
            "unfocus" | "esc" => report(self.machine.unfocus()),
            "menu" => self.show_menu(),
            "speak" => {
                if !self.menu.play_pronunciation(&mut self.tts.borrow_mut()) {
                    println!("Nothing to pronounce");
                }
            }
            "examples" => self.examples(),
            "lang" => self.language(args.first().copied()),
            "pause" => match args.first().map(|a| a.parse::<f32>()) {
                None => self.pipeline.borrow_mut().pause_only(),
                Some(Ok(seconds)) if seconds.is_finite() && seconds > 0.0 => self
                    .pipeline
                    .borrow_mut()
                    .pause_for(Duration::from_secs_f32(seconds), Instant::now()),
                Some(_) => println!("usage: pause [seconds]"),
            },
            "resume" => self.pipeline.borrow_mut().enable(),
            "toggle" => self.pipeline.borrow_mut().toggle(),
            "help" => println!("{}", HELP),
            "quit" | "exit" => return false,
            other => println!("Unknown command '{}', try 'help'", other),
        }

        if self.machine.refresh() == FocusTransition::Unfocused {
            println!("Focused object is gone, focus cleared");
        }
        true
    }

    fn detect(&mut self, args: &[&str]) {
        let mut frame = Vec::new();
        for (i, token) in args.iter().enumerate() {
            let Some((category, confidence)) = token.split_once(':') else {
                println!("Expected <category>:<confidence>, got '{}'", token);
                return;
            };
            let Ok(confidence) = confidence.parse::<f32>() else {
                println!("Invalid confidence '{}'", confidence);
                return;
            };
            let rect = ScreenRect::new(40.0 + i as f32 * 220.0, 400.0, 200.0, 200.0);
            frame.push(Detection::new(rect, vec![Categorization::new(category, confidence)]));
        }

        match self.pipeline.borrow_mut().process_frame(&frame) {
            FrameOutcome::Paused => println!("Detection is paused"),
            FrameOutcome::Throttled => println!("Frame dropped (too soon after the previous one)"),
            FrameOutcome::Rendered(count) => println!("{} overlay(s) drawn", count),
        }
        self.list();
    }

    fn list(&self) {
        let board = self.board.borrow();
        let mut any = false;
        for overlay in board.visible() {
            any = true;
            let marker = match overlay.state {
                SelectionState::Focused => "*",
                SelectionState::Saved => "+",
                SelectionState::Normal => " ",
            };
            println!("{} #{} {}", marker, overlay.id, overlay.display_text().replace('\n', " | "));
        }
        if !any {
            println!("(no overlays)");
        }
    }

    fn show_menu(&self) {
        let view = self.menu.view();
        if !view.visible {
            println!("(menu hidden)");
            return;
        }
        println!("{}", view.title);
        println!("{}", view.info);
        println!("at ({:.0}, {:.0})", view.position.x, view.position.y);
    }

    fn examples(&self) {
        let examples = self.menu.show_examples(&self.sentences);
        if examples.is_empty() {
            println!("No examples");
        }
        for example in examples {
            println!("- {}", example.english_sentence);
            println!("  {} ({})", example.translated_sentence, example.source);
        }
    }

    fn language(&mut self, name: Option<&str>) {
        match name {
            None => {
                let current = self.settings.borrow().current();
                println!("{} {}", current.flag(), current.display_name());
            }
            Some(name) => match TargetLanguage::parse(name) {
                Some(language) => {
                    if !self.settings.borrow_mut().set_language(language) {
                        println!("Already using {}", language.display_name());
                    }
                }
                None => println!("Unknown language '{}'", name),
            },
        }
    }
}

fn report(transition: FocusTransition) {
    match transition {
        FocusTransition::Focused => println!("Focused"),
        FocusTransition::Unfocused => println!("Unfocused"),
        FocusTransition::Rejected => println!("No such overlay"),
        FocusTransition::Unchanged => println!("Nothing is focused"),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting LinguaAR v{}", env!("CARGO_PKG_VERSION"));

    // Load or create configuration
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    // Runtime for the legacy remote translation fallback
    let runtime = tokio::runtime::Runtime::new()?;

    let mut session = Session::new(&config, &runtime);
    log::info!("Speech provider: {}", session.tts.borrow().provider_name());
    println!("{}", HELP);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !session.handle(line.trim()) {
            break;
        }
    }

    session.machine.unfocus();
    session.tts.borrow_mut().stop();
    Ok(())
}
