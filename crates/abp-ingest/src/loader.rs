//! Dataset loading.
//!
//! The document is decoded straight into the model types. The deserializer
//! is wrapped with `serde_path_to_error` so a structural error names the
//! field that failed, e.g. `specialites[0].interventions[2].source_page`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::error::Category;
use tracing::{debug, info};

use abp_model::Dataset;

use crate::error::{LoadError, Result};

const ROOT: &str = "$";

/// Load and structurally decode the dataset at `path`.
///
/// Only the shape of the document is checked here; semantic invariants are
/// the validator's job.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    debug!(path = %path.display(), "reading dataset");
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let dataset = load_dataset_from_str(&text, path)?;
    info!(
        path = %path.display(),
        version = %dataset.version,
        specialties = dataset.specialties.len(),
        interventions = dataset.intervention_count(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Decode a dataset from JSON text. `origin` is only used in error messages.
pub fn load_dataset_from_str(text: &str, origin: &Path) -> Result<Dataset> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    let dataset: Dataset = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|error| schema_error(origin, error))?;
    deserializer.end().map_err(|error| LoadError::Schema {
        path: origin.to_path_buf(),
        field_path: ROOT.to_string(),
        message: error.to_string(),
    })?;
    Ok(dataset)
}

fn schema_error(origin: &Path, error: serde_path_to_error::Error<serde_json::Error>) -> LoadError {
    let tracked = error.path().to_string();
    let inner = error.into_inner();
    let message = inner.to_string();
    let field_path = match inner.classify() {
        Category::Data => field_path(&tracked, &message),
        // Not JSON at all: no field to point at.
        Category::Syntax | Category::Eof | Category::Io => ROOT.to_string(),
    };
    LoadError::Schema {
        path: origin.to_path_buf(),
        field_path,
        message,
    }
}

/// Join the tracked path with the name of a missing field.
///
/// serde raises "missing field" from the enclosing object, so the tracked
/// path stops one level short and the name is only available in the message.
fn field_path(tracked: &str, message: &str) -> String {
    let parent = (tracked != ".").then_some(tracked);
    match (parent, missing_field(message)) {
        (Some(parent), Some(field)) => format!("{parent}.{field}"),
        (None, Some(field)) => field.to_string(),
        (Some(parent), None) => parent.to_string(),
        (None, None) => ROOT.to_string(),
    }
}

/// Extract the field name from serde's "missing field `x`" message.
fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split_once('`'))
        .map(|(field, _)| field)
}
