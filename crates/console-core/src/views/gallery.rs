//! Image viewer over an asset's attachments

use crate::domain::AssetFile;

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    images: Vec<AssetFile>,
    cursor: Option<usize>,
}

impl Gallery {
    /// Keeps only image attachments, in their original order.
    pub fn new(files: &[AssetFile]) -> Self {
        Self {
            images: files.iter().filter(|f| f.is_image()).cloned().collect(),
            cursor: None,
        }
    }

    pub fn images(&self) -> &[AssetFile] {
        &self.images
    }

    pub fn is_open(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn current(&self) -> Option<&AssetFile> {
        self.cursor.and_then(|i| self.images.get(i))
    }

    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// Opens on `index`; out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.cursor = Some(index);
            true
        } else {
            false
        }
    }

    pub fn open_file(&mut self, file_id: &str) -> bool {
        match self.images.iter().position(|f| f.id == file_id) {
            Some(index) => self.open(index),
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.cursor = None;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.cursor {
            self.cursor = Some((i + 1) % self.images.len());
        }
    }

    pub fn previous(&mut self) {
        if let Some(i) = self.cursor {
            let len = self.images.len();
            self.cursor = Some((i + len - 1) % len);
        }
    }

    /// Drops a deleted file. The viewer stays on the same slot, moves back
    /// when the last image went away, and closes when nothing is left.
    pub fn remove(&mut self, file_id: &str) {
        let Some(index) = self.images.iter().position(|f| f.id == file_id) else {
            return;
        };
        self.images.remove(index);

        self.cursor = match self.cursor {
            _ if self.images.is_empty() => None,
            Some(c) if c > index => Some(c - 1),
            Some(c) if c >= self.images.len() => Some(self.images.len() - 1),
            other => other,
        };
    }
}
