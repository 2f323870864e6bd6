use rust_sentiment::{ClassifyError, Label, Labels, SentimentClassifierService, TextClassifier};
use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("input too long: {0} characters")]
struct TooLong(usize);

/// Labels texts by their first word and records every text it receives.
struct RecordingClassifier {
    calls: AtomicUsize,
    seen: RefCell<Vec<String>>,
    max_chars: usize,
}

impl RecordingClassifier {
    fn new(max_chars: usize) -> RecordingClassifier {
        RecordingClassifier {
            calls: AtomicUsize::new(0),
            seen: RefCell::new(Vec::new()),
            max_chars,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextClassifier for RecordingClassifier {
    type Output = Labels;
    type Error = TooLong;

    fn classify(&self, text: &str) -> Result<Labels, TooLong> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.borrow_mut().push(text.to_string());
        let length = text.chars().count();
        if length > self.max_chars {
            return Err(TooLong(length));
        }
        let label = if text.starts_with("I love") {
            "POSITIVE"
        } else {
            "NEGATIVE"
        };
        Ok(Labels::from(vec![Label::new(label, 0.875)]))
    }
}

#[test]
fn classify_renders_capability_output() {
    let classifier = RecordingClassifier::new(64);
    let service = SentimentClassifierService::new(&classifier);

    let output = service.classify(b"I love this product").unwrap();

    let expected = classifier.classify("I love this product").unwrap().to_string();
    assert_eq!(output, expected);
    assert_eq!(output, "[{'label': 'POSITIVE', 'score': 0.875}]");
}

#[test]
fn classify_passes_decoded_text() {
    let classifier = RecordingClassifier::new(64);
    let service = SentimentClassifierService::new(&classifier);

    let output = service.classify("Ça ne marche pas".as_bytes()).unwrap();

    assert!(output.contains("'NEGATIVE'"));
    assert_eq!(*classifier.seen.borrow(), vec!["Ça ne marche pas".to_string()]);
}

#[test]
fn invalid_utf8_never_reaches_capability() {
    let classifier = RecordingClassifier::new(64);
    let service = SentimentClassifierService::new(&classifier);

    let error = service.classify(b"\xff\xfe").unwrap_err();

    assert!(matches!(error, ClassifyError::Decoding(_)));
    assert_eq!(classifier.calls(), 0);
}

#[test]
fn truncated_multibyte_sequence_is_decoding_error() {
    let classifier = RecordingClassifier::new(64);
    let service = SentimentClassifierService::new(&classifier);

    let bytes = "é".as_bytes();
    let error = service.classify(&bytes[..1]).unwrap_err();

    assert!(matches!(error, ClassifyError::Decoding(_)));
    assert_eq!(classifier.calls(), 0);
}

#[test]
fn capability_error_propagates_unchanged() {
    let classifier = RecordingClassifier::new(4);
    let service = SentimentClassifierService::new(&classifier);

    let error = service.classify(b"This is terrible").unwrap_err();

    assert_eq!(error.capability(), Some(&TooLong(16)));
    assert_eq!(error.to_string(), "input too long: 16 characters");
    assert_eq!(classifier.calls(), 1);
}

#[test]
fn empty_input_is_forwarded_as_empty_text() {
    let classifier = RecordingClassifier::new(64);
    let service = SentimentClassifierService::new(&classifier);

    let output = service.classify(b"").unwrap();

    assert_eq!(output, "[{'label': 'NEGATIVE', 'score': 0.875}]");
    assert_eq!(*classifier.seen.borrow(), vec![String::new()]);
}

#[test]
fn repeated_calls_reuse_capability_and_are_idempotent() {
    let service = SentimentClassifierService::new(RecordingClassifier::new(64));

    let first = service.classify(b"I love this product").unwrap();
    let second = service.classify(b"I love this product").unwrap();

    assert_eq!(first, second);
    assert_eq!(service.classifier().calls(), 2);

    let classifier = service.into_inner();
    assert_eq!(classifier.seen.borrow().len(), 2);
}

/// Counts constructions: the service never builds a capability on its own.
struct CountingClassifier;

static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

impl CountingClassifier {
    fn new() -> CountingClassifier {
        CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
        CountingClassifier
    }
}

impl TextClassifier for CountingClassifier {
    type Output = Labels;
    type Error = std::convert::Infallible;

    fn classify(&self, _text: &str) -> Result<Labels, Self::Error> {
        Ok(Labels::from(vec![Label::new("POSITIVE", 1.0)]))
    }
}

#[test]
fn shared_service_acquires_capability_once() {
    let service = Arc::new(SentimentClassifierService::new(CountingClassifier::new()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || {
                for _ in 0..8 {
                    let output = service.classify(b"I love this product").unwrap();
                    assert_eq!(output, "[{'label': 'POSITIVE', 'score': 1.0}]");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 1);
}

#[test]
fn boxed_and_shared_capabilities() {
    let boxed: Box<RecordingClassifier> = Box::new(RecordingClassifier::new(64));
    let service = SentimentClassifierService::new(boxed);
    assert!(service.classify(b"I love it").unwrap().contains("POSITIVE"));

    let shared = Arc::new(CountingClassifier);
    let service = SentimentClassifierService::new(Arc::clone(&shared));
    assert!(service.classify(b"ok").is_ok());
}
