use std::time::{Duration, Instant};

use keytrainer::generator::pool::{CharacterPool, PoolFlags};
use keytrainer::generator::random::RandomGenerator;
use keytrainer::generator::text::{SEPARATOR, TextLength};
use keytrainer::generator::GeneratorSettings;
use keytrainer::i18n::Language;
use keytrainer::lifecycle::{LifecycleController, Message, Notifier, Phase};
use keytrainer::session::diff::CharTag;
use keytrainer::session::result::CompletionEvent;

#[derive(Default)]
struct Collected(Vec<CompletionEvent>);

impl Notifier for Collected {
    fn notify(&mut self, event: CompletionEvent) {
        self.0.push(event);
    }
}

fn controller(
    language: Language,
    length: u32,
    seed: u64,
) -> LifecycleController<RandomGenerator, Collected> {
    let settings = GeneratorSettings {
        language,
        flags: PoolFlags::default(),
        length: TextLength::new(length).unwrap(),
    };
    LifecycleController::new(settings, RandomGenerator::seeded(seed), Collected::default())
}

fn type_prefixes(
    controller: &mut LifecycleController<RandomGenerator, Collected>,
    text: &str,
    start: Instant,
    step: Duration,
) {
    let mut typed = String::new();
    for (i, ch) in text.chars().enumerate() {
        typed.push(ch);
        let now = start + step * (i as u32 + 1);
        controller.handle_at(Message::KeyInput(typed.clone()), now);
    }
}

#[test]
fn typing_a_text_perfectly_completes_and_continues() {
    let mut controller = controller(Language::En, 10, 8);
    let t0 = Instant::now();
    controller.start_at(t0);
    let first = controller.tracker().target().to_string();
    assert_eq!(first.chars().count(), 11);

    // 11 chars at 100ms each: 1.1s, 600 chars per minute
    type_prefixes(&mut controller, &first, t0, Duration::from_millis(100));

    let events = &controller.notifier().0;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].speed, 600);
    assert_eq!(events[0].accuracy, 100);
    assert_eq!(events[0].text, first);

    assert_eq!(controller.phase(), Phase::Active);
    assert_ne!(controller.tracker().target().to_string(), first);
    assert_eq!(controller.tracker().total(), 0);
}

#[test]
fn counts_stay_within_bounds_while_typing_with_errors() {
    let mut controller = controller(Language::En, 30, 2);
    let t0 = Instant::now();
    controller.start_at(t0);
    let target = controller.tracker().target().to_string();
    let visible = target.chars().count();

    let mut typed = String::new();
    for (i, ch) in target.chars().enumerate() {
        typed.push(if i % 3 == 0 { '#' } else { ch });
        let eval = controller
            .handle_at(Message::KeyInput(typed.clone()), t0 + Duration::from_secs(1))
            .unwrap();
        let tracker = controller.tracker();
        assert!(tracker.correct() <= tracker.total());
        assert!(tracker.total() <= visible);
        assert_eq!(eval.diff.len(), visible);
        assert_eq!(
            eval.diff.tags().iter().filter(|t| **t == CharTag::Neutral).count(),
            visible - tracker.total()
        );
    }
    assert!(controller.notifier().0.is_empty());
}

#[test]
fn language_switch_mid_session_draws_from_new_pool() {
    let mut controller = controller(Language::En, 50, 4);
    let t0 = Instant::now();
    controller.start_at(t0);
    controller.handle_at(Message::KeyInput("abc".to_string()), t0);
    controller.handle_at(Message::LanguageChanged(Language::Ru), t0);

    let pool = CharacterPool::build(Language::Ru, PoolFlags::default());
    let target = controller.tracker().target();
    assert!(
        target
            .chars()
            .iter()
            .all(|&ch| ch == SEPARATOR || pool.contains(ch))
    );
    assert_eq!(controller.tracker().total(), 0);
    assert_eq!(controller.language(), Language::Ru);
}

#[test]
fn idle_language_switch_does_not_generate() {
    let mut controller = controller(Language::En, 10, 4);
    controller.handle(Message::LanguageChanged(Language::Ru));
    assert_eq!(controller.phase(), Phase::Idle);
    assert!(controller.tracker().target().is_empty());
}

#[test]
fn completion_message_is_localized() {
    let mut controller = controller(Language::Ru, 5, 6);
    let t0 = Instant::now();
    controller.start_at(t0);
    let text = controller.tracker().target().to_string();
    controller.handle_at(Message::KeyInput(text), t0 + Duration::from_secs(2));

    let message = controller.notifier().0[0].message();
    let lines: Vec<&str> = message.lines().collect();
    assert_eq!(lines[0], "Поздравляем! Вы закончили текст!");
    assert_eq!(lines[1], "Скорость: 150 зн/мин");
    assert_eq!(lines[2], "Точность: 100%");
}
