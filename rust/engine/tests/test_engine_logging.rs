use std::sync::{Arc, Mutex};

use holdem_engine::table::{Table, TableConfig};
use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

#[derive(Debug, Clone)]
struct Entry {
    level: Level,
    message: String,
    fields: Vec<(String, String)>,
}

#[derive(Clone, Default)]
struct Capture {
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl<S: tracing::Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = Visitor::default();
        event.record(&mut visitor);
        self.entries.lock().unwrap().push(Entry {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct Visitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for Visitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let v = format!("{:?}", value);
        if field.name() == "message" {
            self.message = v;
        } else {
            self.fields.push((field.name().to_string(), v));
        }
    }
}

fn captured<F: FnOnce()>(f: F) -> Vec<Entry> {
    let capture = Capture::default();
    let subscriber = Registry::default().with(capture.clone());
    tracing::subscriber::with_default(subscriber, f);
    let entries = capture.entries.lock().unwrap().clone();
    entries
}

#[test]
fn refused_round_is_a_warning() {
    let entries = captured(|| {
        let mut t = Table::new(TableConfig {
            seed: Some(1),
            ..TableConfig::default()
        });
        t.sit(0, "solo").unwrap();
        assert!(t.start_round().is_err());
    });
    let warn = entries
        .iter()
        .find(|e| e.level == Level::WARN)
        .expect("warning emitted");
    assert!(warn.message.contains("round refused"));
    assert!(warn.fields.iter().any(|(k, v)| k == "seated" && v == "1"));
}

#[test]
fn round_emits_dealer_shuffle_and_settlement_events() {
    let entries = captured(|| {
        let mut t = Table::new(TableConfig {
            seed: Some(2),
            ..TableConfig::default()
        });
        t.sit(0, "a").unwrap();
        t.sit(1, "b").unwrap();
        t.start_round().unwrap();
        t.deal().unwrap();
        t.showdown().unwrap();
    });
    let has = |level: Level, text: &str| {
        entries
            .iter()
            .any(|e| e.level == level && e.message.contains(text))
    };
    assert!(has(Level::INFO, "opening dealer chosen"));
    assert!(has(Level::INFO, "round started"));
    assert!(has(Level::DEBUG, "deck shuffled"));
    assert!(has(Level::DEBUG, "deck cut"));
    assert!(has(Level::DEBUG, "hand evaluated"));
    assert!(has(Level::INFO, "showdown settled"));
}
