use std::path::Path;

use adpref_core::CandidateCopy;

use crate::{read_json_list, StoreError};

/// Load the candidate corpus. A missing file yields an empty corpus.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the file exists but cannot be read and
/// [`StoreError::Json`] if it is not a list of candidate objects.
pub fn load_corpus(path: &Path) -> Result<Vec<CandidateCopy>, StoreError> {
    let corpus: Vec<CandidateCopy> = read_json_list(path)?;
    tracing::info!(path = %path.display(), count = corpus.len(), "loaded candidate corpus");
    Ok(corpus)
}
