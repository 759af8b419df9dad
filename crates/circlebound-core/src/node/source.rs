use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use crate::error::Result;
use crate::io::image_io::{is_image_file, load_message};
use crate::io::ser::SerReader;
use crate::io::ImageMessage;

/// A subscription delivering image messages in arrival order.
pub trait FrameSource {
    /// Name of the topic this source is bound to.
    fn topic(&self) -> &str;

    /// Next message, an error for a message that could not be read, or
    /// `None` once the transport has shut down.
    fn next_message(&mut self) -> Option<Result<ImageMessage>>;

    /// Total number of messages, when known up front.
    fn len_hint(&self) -> Option<usize> {
        None
    }
}

/// Frames of a SER video, in file order.
pub struct SerSource {
    reader: SerReader,
    topic: String,
    next: usize,
}

impl SerSource {
    pub fn open(path: &Path, topic: impl Into<String>) -> Result<Self> {
        Ok(Self {
            reader: SerReader::open(path)?,
            topic: topic.into(),
            next: 0,
        })
    }

    pub fn reader(&self) -> &SerReader {
        &self.reader
    }
}

impl FrameSource for SerSource {
    fn topic(&self) -> &str {
        &self.topic
    }

    fn next_message(&mut self) -> Option<Result<ImageMessage>> {
        if self.next >= self.reader.frame_count() {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.reader.read_message(index))
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.reader.frame_count())
    }
}

/// Image files of a directory, sorted by file name.
pub struct ImageDirSource {
    files: Vec<PathBuf>,
    topic: String,
    next: usize,
}

impl ImageDirSource {
    pub fn open(dir: &Path, topic: impl Into<String>) -> Result<Self> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && is_image_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(Self {
            files,
            topic: topic.into(),
            next: 0,
        })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl FrameSource for ImageDirSource {
    fn topic(&self) -> &str {
        &self.topic
    }

    fn next_message(&mut self) -> Option<Result<ImageMessage>> {
        let path = self.files.get(self.next)?;
        let seq = self.next as u32;
        self.next += 1;
        Some(load_message(path, seq))
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.files.len())
    }
}

/// Messages published from another thread through a channel.
///
/// The transport counts as shut down once every sender is dropped.
pub struct ChannelSource {
    receiver: Receiver<ImageMessage>,
    topic: String,
}

impl ChannelSource {
    pub fn new(receiver: Receiver<ImageMessage>, topic: impl Into<String>) -> Self {
        Self {
            receiver,
            topic: topic.into(),
        }
    }
}

impl FrameSource for ChannelSource {
    fn topic(&self) -> &str {
        &self.topic
    }

    fn next_message(&mut self) -> Option<Result<ImageMessage>> {
        self.receiver.recv().ok().map(Ok)
    }
}
