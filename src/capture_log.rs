use log::{Level, Log, Metadata, Record};
use std::sync::Mutex;

/// Keeps every record it receives so tests can assert on the log stream.
#[derive(Default)]
pub struct CaptureLog {
    records: Mutex<Vec<(Level, String)>>,
}

impl CaptureLog {
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.records.lock().unwrap().clone()
    }

    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg)
            .collect()
    }

    pub fn announced_endpoints(&self) -> Vec<String> {
        self.messages_at(Level::Debug)
            .into_iter()
            .filter(|msg| msg.starts_with("Analyzing endpoint"))
            .collect()
    }
}

impl Log for CaptureLog {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}
