//! Trace logging of replaced characters.

/// Log a single character replacement when the `trace_escape` feature is on.
#[inline(always)]
pub(crate) fn replaced(escaper: &str, offset: usize, ch: char, replacement: &str) {
    if cfg!(feature = "trace_escape") {
        log::trace!("{escaper}: {offset:>4} {:<6} -> {replacement}", ch.escape_default().to_string());
    }
}

#[cfg(all(test, feature = "trace_escape"))]
mod test {
    use std::sync::Mutex;

    use log::{LevelFilter, Log, Metadata, Record};

    struct CaptureLogger {
        lines: Mutex<Vec<String>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            self.lines.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger {
        lines: Mutex::new(Vec::new()),
    };

    #[test]
    fn test_replacements_are_traced() {
        log::set_logger(&LOGGER).expect("install logger");
        log::set_max_level(LevelFilter::Trace);

        crate::escape_html_label_string("~~<~~");
        crate::escape_label_string("q  ~");

        // Other tests may log concurrently, so only look for our own lines.
        let lines = LOGGER.lines.lock().unwrap();
        assert!(lines.iter().any(|line| line.starts_with("html:") && line.contains("&lt;")), "{lines:?}");
        assert!(lines.iter().any(|line| line.starts_with("label:") && line.contains("   2 ")), "{lines:?}");
    }
}
