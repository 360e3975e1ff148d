use std::io::Write;
use std::sync::{Arc, Mutex};

use codec::{decode, encode_str, CodecError};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted events in memory.
#[derive(Clone, Default)]
struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.buf.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(level: tracing::Level, f: impl FnOnce()) -> String {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    writer.contents()
}

#[test]
fn rejected_encode_logs_field_and_error() {
    let logs = capture(tracing::Level::DEBUG, || {
        assert_eq!(
            encode_str("1.0.post8"),
            Err(CodecError::PostOverflow { value: 8, max: 7 })
        );
    });
    assert!(logs.contains("version rejected by encoder"), "{logs}");
    assert!(logs.contains("field=\"post\""), "{logs}");
    assert!(logs.contains("post-release number 8 larger than 7"), "{logs}");
}

#[test]
fn legacy_word_decode_logs_word() {
    // Revision 1 layout of 1.0.post1.dev4.
    let legacy = 0x0001_0000_0000_0000 | (0b1001 << 4) | 4;
    let logs = capture(tracing::Level::DEBUG, || {
        assert_eq!(decode(legacy).to_string(), "1.0.0.0.post1.dev4");
    });
    assert!(logs.contains("layout revision 1"), "{logs}");
    assert!(logs.contains(&format!("word={legacy}")), "{logs}");
}

#[test]
fn current_words_decode_silently() {
    let word = encode_str("1.0.post1.dev4").unwrap();
    let logs = capture(tracing::Level::DEBUG, || {
        assert_eq!(decode(word).to_string(), "1.0.0.0.post1.dev4");
    });
    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn successful_encode_traces_word() {
    let mut word = 0;
    let logs = capture(tracing::Level::TRACE, || {
        word = encode_str("2.0rc1").unwrap();
    });
    assert!(logs.contains("encoded version"), "{logs}");
    assert!(logs.contains(&format!("word={word}")), "{logs}");
    assert!(!capture(tracing::Level::DEBUG, || {
        encode_str("2.0rc1").unwrap();
    })
    .contains("encoded version"));
}
