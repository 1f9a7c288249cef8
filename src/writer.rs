use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::errors::{GeneratorError, GeneratorResult};
use crate::models::Collection;

const INDENT: &[u8] = b"    ";

/// Serialize with four-space indentation, the layout Postman itself exports.
pub fn render<T: Serialize + ?Sized>(value: &T) -> GeneratorResult<String> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;

    // serde_json only emits valid UTF-8.
    String::from_utf8(out).map_err(|err| GeneratorError::invalid(err.to_string()))
}

pub(crate) fn render_value(value: &Value) -> String {
    render(value).expect("serde_json::Value always serializes")
}

/// Parse JSON text and render it again with the same layout. Key order is kept.
pub fn reformat(text: &str) -> GeneratorResult<String> {
    let value: Value = serde_json::from_str(text)?;
    render(&value)
}

pub fn write_collection(path: impl AsRef<Path>, collection: &Collection) -> GeneratorResult<PathBuf> {
    let path = path.as_ref();
    let text = render(collection)?;

    fs::write(path, text.as_bytes()).map_err(|err| GeneratorError::io(path, err))?;

    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    tracing::info!(path = %resolved.display(), bytes = text.len(), "collection written");

    Ok(resolved)
}
