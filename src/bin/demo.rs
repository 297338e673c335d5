//! LinguaAR - Demo CLI
//!
//! Scripted walkthrough of the core engine: offline translation of a
//! detection frame, focus toggling, language switching and the action menu.
//! Nothing is persisted.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

// Import from our library
use lingua_ar_lib::core::{Categorization, Config, Detection, MemoryPreferenceStore, ScreenRect, TargetLanguage};
use lingua_ar_lib::detection::DetectionPipeline;
use lingua_ar_lib::focus::{FocusEvent, FocusStateMachine};
use lingua_ar_lib::i18n::{LanguageSettings, SentenceDatabase, TranslationTable};
use lingua_ar_lib::menu::ActionMenu;
use lingua_ar_lib::overlay::OverlayBoard;
use lingua_ar_lib::translate::TranslationService;
use lingua_ar_lib::tts::{LogTtsProvider, TtsManager};

fn frame(labels: &[(&str, f32)]) -> Vec<Detection> {
    labels
        .iter()
        .enumerate()
        .map(|(i, (category, confidence))| {
            Detection::new(
                ScreenRect::new(60.0 + i as f32 * 260.0, 700.0, 220.0, 220.0),
                vec![Categorization::new(category, *confidence)],
            )
        })
        .collect()
}

fn print_board(board: &OverlayBoard) {
    for overlay in board.visible() {
        println!("      #{} {}", overlay.id, overlay.display_text().replace('\n', " -> "));
    }
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("==============================================");
    println!("   LinguaAR - Demo CLI");
    println!("==============================================\n");

    let config = Config::default();

    // 1. Translation table
    println!("[1/5] Loading offline translations...");
    let table = TranslationTable::builtin();
    let report = table.validate();
    println!("      {} categories, {} duplicates\n", report.total, report.duplicates);

    // 2. Language settings
    println!("[2/5] Language settings (in-memory)...");
    let mut settings = LanguageSettings::load(Box::new(MemoryPreferenceStore::new()));
    println!("      Current: {} {}\n", settings.current().flag(), settings.current().display_name());

    // 3. Pipeline and focus
    println!("[3/5] Processing a detection frame...");
    let board = Rc::new(RefCell::new(OverlayBoard::new()));
    let pipeline = Rc::new(RefCell::new(DetectionPipeline::new(
        &config.detection,
        TranslationService::new(Some(table), None),
        settings.current(),
        board.clone(),
    )));
    let start = Instant::now();
    let outcome = pipeline.borrow_mut().process_frame_at(
        &frame(&[("chair", 0.91), ("traffic_light", 0.77), ("unicorn", 0.83), ("cup", 0.42)]),
        start,
    );
    println!("      Outcome: {:?}", outcome);
    print_board(&board.borrow());
    println!();

    let mut machine = FocusStateMachine::new(board.clone()).with_detection(pipeline.clone(), true);
    machine.subscribe(|event| match event {
        FocusEvent::Focused(data) => println!("      event: focused {} ({})", data.category, data.translation),
        FocusEvent::Unfocused => println!("      event: unfocused"),
    });
    let tts = Rc::new(RefCell::new(TtsManager::with_provider(
        Box::new(LogTtsProvider),
        &config.speech,
        settings.current(),
    )));
    let menu = ActionMenu::attach(&config.menu, &mut machine);

    // 4. Focus interactions
    println!("[4/5] Tapping overlays...");
    machine.handle_tap(0);
    {
        let view = menu.view();
        println!("      menu: {} / {}", view.title, view.info);
    }
    println!("      pronounce: {}", menu.play_pronunciation(&mut tts.borrow_mut()));

    let sentences = SentenceDatabase::bundled().unwrap_or_default();
    for example in menu.show_examples(&sentences) {
        println!("      e.g. {} = {}", example.english_sentence, example.translated_sentence);
    }

    let paused = pipeline
        .borrow_mut()
        .process_frame_at(&frame(&[("dog", 0.9)]), start + Duration::from_secs(1));
    println!("      frame while focused: {:?}", paused);

    println!("      tap on hidden #1: {:?}", machine.handle_tap(1));
    machine.handle_tap(0);
    println!("      focused after second tap on #0: {}\n", machine.has_focus());

    // 5. Language switch
    println!("[5/5] Switching to French...");
    {
        let pipeline = Rc::clone(&pipeline);
        let tts = Rc::clone(&tts);
        settings.subscribe(move |language| {
            pipeline.borrow_mut().set_language(*language);
            tts.borrow_mut().set_language(*language);
        });
    }
    settings.set_language(TargetLanguage::French);
    pipeline.borrow_mut().process_frame_at(
        &frame(&[("chair", 0.91), ("traffic_light", 0.77)]),
        start + Duration::from_secs(2),
    );
    print_board(&board.borrow());

    println!("\n==============================================");
    println!("   Demo complete");
    println!("==============================================\n");
}
