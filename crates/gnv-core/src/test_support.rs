use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use crate::npm::{NpmCommand, NpmRunner, NpmVerb};
use gnv_error::ExitInfo;

/// Records every npm call instead of running it.
#[derive(Clone, Default)]
pub struct RecordingNpm {
    calls: Arc<Mutex<Vec<NpmCommand>>>,
    failure: Option<(NpmVerb, ExitInfo)>,
}

impl RecordingNpm {
    pub fn failing_on(verb: NpmVerb, exit: ExitInfo) -> Self {
        Self {
            calls: Arc::default(),
            failure: Some((verb, exit)),
        }
    }

    pub fn calls(&self) -> Vec<NpmCommand> {
        self.calls.lock().unwrap().clone()
    }

    pub fn verbs(&self) -> Vec<NpmVerb> {
        self.calls().iter().map(|call| call.verb).collect()
    }
}

impl NpmRunner for RecordingNpm {
    async fn run(&self, _project_dir: &Path, command: &NpmCommand) -> Result<(), ExitInfo> {
        self.calls.lock().unwrap().push(command.clone());
        match &self.failure {
            Some((verb, exit)) if *verb == command.verb => Err(exit.clone()),
            _ => Ok(()),
        }
    }
}

pub fn write_json(dir: &Path, value: &Value) {
    let content = serde_json::to_string_pretty(value).unwrap();
    std::fs::write(dir.join("package.json"), content).unwrap();
}

pub fn read_json(dir: &Path) -> Value {
    let content = std::fs::read_to_string(dir.join("package.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

pub fn project_with(value: Value) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), &value);
    gnv_logger::init_logger(true);
    dir
}
