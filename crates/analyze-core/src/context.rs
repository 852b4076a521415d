use std::path::PathBuf;
use std::sync::Arc;

/// Anything holding the full original source text of the script under analysis.
pub trait AnalyzerContext {
    fn source(&self) -> &str;
}

/// Analysis context for a single script.
///
/// The source is held as `Arc<str>` so contexts can be cloned into worker threads without
/// copying the text.
#[derive(Debug, Clone)]
pub struct ScriptContext {
    source: Arc<str>,
    file_path: Option<PathBuf>,
}

impl ScriptContext {
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
            file_path: None,
        }
    }

    pub fn with_file_path(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn file_path(&self) -> Option<&std::path::Path> {
        self.file_path.as_deref()
    }
}

impl AnalyzerContext for ScriptContext {
    fn source(&self) -> &str {
        &self.source
    }
}

impl AnalyzerContext for str {
    fn source(&self) -> &str {
        self
    }
}

impl AnalyzerContext for String {
    fn source(&self) -> &str {
        self
    }
}

impl<T: AnalyzerContext + ?Sized> AnalyzerContext for &T {
    fn source(&self) -> &str {
        (**self).source()
    }
}
