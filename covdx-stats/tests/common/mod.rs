//! Synthetic alignment files shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use covdx_core::models::Region;
use covdx_stats::{AlignmentOpener, AlignmentSource, BatchOptions, ReadLengths};

/// What a synthetic file contains for every region it is asked about.
#[derive(Clone)]
pub enum FileContent {
    Reads { depth: Vec<u32>, lengths: Vec<u32> },
    Corrupt,
    Panics,
}

pub struct SyntheticSource {
    content: FileContent,
}

impl AlignmentSource for SyntheticSource {
    fn depth(&mut self, region: &Region) -> io::Result<Vec<u32>> {
        match &self.content {
            FileContent::Reads { depth, .. } => {
                assert_eq!(depth.len() as u64, region.width());
                Ok(depth.clone())
            }
            FileContent::Corrupt => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "invalid BGZF header",
            )),
            FileContent::Panics => panic!("decoder state corrupted"),
        }
    }

    fn read_lengths<'a>(&'a mut self, _region: &Region) -> io::Result<ReadLengths<'a>> {
        match &self.content {
            FileContent::Reads { lengths, .. } => Ok(Box::new(lengths.iter().copied().map(Ok))),
            FileContent::Corrupt => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "invalid BGZF header",
            )),
            FileContent::Panics => panic!("decoder state corrupted"),
        }
    }
}

/// Opens synthetic files by path and records every path it was asked to open.
pub struct SyntheticOpener {
    files: HashMap<PathBuf, FileContent>,
    pub opened: Mutex<Vec<PathBuf>>,
}

impl SyntheticOpener {
    pub fn new(files: Vec<(&str, FileContent)>) -> Self {
        SyntheticOpener {
            files: files
                .into_iter()
                .map(|(path, content)| (PathBuf::from(path), content))
                .collect(),
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.files.keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl AlignmentOpener for SyntheticOpener {
    type Source = SyntheticSource;

    fn open(&self, path: &Path) -> io::Result<SyntheticSource> {
        self.opened.lock().unwrap().push(path.to_path_buf());
        match self.files.get(path) {
            Some(content) => Ok(SyntheticSource {
                content: content.clone(),
            }),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        }
    }
}

pub fn reads() -> FileContent {
    FileContent::Reads {
        depth: vec![2, 4, 6, 4, 2],
        lengths: vec![100, 150, 120],
    }
}

pub fn options(workers: usize) -> BatchOptions {
    BatchOptions {
        workers,
        progress: false,
    }
}
