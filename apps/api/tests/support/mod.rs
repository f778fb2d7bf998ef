//! Recording collaborators for controller tests.

use garden_api::{
    api::{FieldFormatter, RequestData, SchemaEngine},
    ApiController, Error, Permission, PermissionChecker, Result,
};
use serde_json::Value;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BuiltFragment {
    pub name: String,
    pub definition: Value,
    pub build: usize,
}

/// Schema engine that numbers every fragment it builds.
#[derive(Debug, Default)]
pub struct CountingSchemaEngine {
    builds: AtomicUsize,
}

impl CountingSchemaEngine {
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

impl SchemaEngine for CountingSchemaEngine {
    type Fragment = BuiltFragment;

    fn schema(&self, definition: Value, name: &str) -> BuiltFragment {
        let build = self.builds.fetch_add(1, Ordering::SeqCst) + 1;
        BuiltFragment {
            name: name.to_string(),
            definition,
            build,
        }
    }
}

/// Formatter that wraps strings in `<format>` tags, or yields nothing for `blank`.
#[derive(Debug, Default)]
pub struct TaggingFormatter;

impl FieldFormatter for TaggingFormatter {
    fn convert(&self, value: &Value, format: &str) -> String {
        match (format, value) {
            ("blank", _) => String::new(),
            (_, Value::String(s)) if s.is_empty() => String::new(),
            (_, Value::String(s)) => format!("<{format}>{s}</{format}>"),
            (_, other) => format!("<{format}>{other}</{format}>"),
        }
    }
}

/// Permission checker that records every call and allows or denies all of them.
#[derive(Debug, Default)]
pub struct RecordingPermissions {
    pub deny: bool,
    calls: Mutex<Vec<(Vec<String>, Option<i64>)>>,
}

impl RecordingPermissions {
    pub fn denying() -> Self {
        Self {
            deny: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(Vec<String>, Option<i64>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl PermissionChecker for RecordingPermissions {
    fn check_permission(&self, permission: &Permission, id: Option<i64>) -> Result<()> {
        let names: Vec<String> = permission.names().into_iter().map(str::to_string).collect();
        self.calls.lock().unwrap().push((names.clone(), id));

        if self.deny {
            Err(Error::PermissionDenied {
                permissions: names,
                resource_id: id,
            })
        } else {
            Ok(())
        }
    }
}

pub type TestController = ApiController<CountingSchemaEngine, TaggingFormatter, RecordingPermissions>;

pub fn controller() -> TestController {
    ApiController::new(
        CountingSchemaEngine::default(),
        TaggingFormatter,
        RecordingPermissions::default(),
    )
}

pub fn denying_controller() -> TestController {
    ApiController::new(
        CountingSchemaEngine::default(),
        TaggingFormatter,
        RecordingPermissions::denying(),
    )
}

pub fn data(value: Value) -> RequestData {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
