use std::path::{Path, PathBuf};

use glob::glob;

use covdx_core::errors::{CovdxError, Result};

/// Extension of the alignment files picked up from an input directory.
pub const BAM_EXTENSION: &str = "bam";

///
/// The `*.bam` files directly inside one input directory, sorted by path.
///
pub struct BamFileGlob {
    curr: usize,
    files: Vec<PathBuf>,
}

impl BamFileGlob {
    pub fn new(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(CovdxError::InvalidPath(dir.to_path_buf()));
        }

        let escaped = glob::Pattern::escape(&dir.to_string_lossy());
        let pattern = format!("{}/*.{}", escaped, BAM_EXTENSION);

        let entries =
            glob(&pattern).map_err(|_| CovdxError::InvalidPath(dir.to_path_buf()))?;
        let mut files = entries
            .map(|entry| entry.map_err(|err| CovdxError::InvalidPath(err.path().to_path_buf())))
            .collect::<Result<Vec<_>>>()?;
        files.retain(|path| path.is_file());
        files.sort();

        Ok(BamFileGlob { files, curr: 0 })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Iterator for BamFileGlob {
    type Item = PathBuf;
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.files.get(self.curr).cloned();
        self.curr += 1;
        result
    }
}
