use serde_json::Value;

/// Data-import boundary of the host form framework.
///
/// On a verified authentication the server may return an application data
/// payload; the ceremony client pushes it through this trait exactly once
/// per ceremony so the host can merge it into the active form's data model.
pub trait FormDataSink: Send + Sync {
    fn import_data(&self, payload: Value);
}
