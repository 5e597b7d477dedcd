//! PNG file display sink.

use std::path::{Path, PathBuf};

use glint_renderer::{Frame, FrameSink, SinkError};

/// Writes every presented frame to a PNG file, replacing the previous one.
pub struct PngSink {
    path: PathBuf,
    written: u32,
}

impl PngSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of frames successfully written.
    pub fn written(&self) -> u32 {
        self.written
    }
}

impl FrameSink for PngSink {
    fn present(&mut self, frame: &Frame<'_>) -> Result<(), SinkError> {
        image::save_buffer_with_format(
            &self.path,
            frame.rgba,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| match e {
            image::ImageError::IoError(io) => SinkError::Io(io),
            other => SinkError::Encode(other.to_string()),
        })?;

        self.written += 1;
        log::debug!("Wrote {} ({} samples)", self.path.display(), frame.samples);
        Ok(())
    }
}
