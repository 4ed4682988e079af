//! Single pass over a G-code file: match, reclassify, elide.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{ConfigError, MaskConfig};
use crate::gcode::{Elision, GCodeError, MarkingMoveMatcher, Reclassifier, RedundancyElider};

#[derive(Debug, Error)]
pub enum MaskError {
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("GCode error: {0}")]
    GCode(#[from] GCodeError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl MaskError {
    fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        MaskError::Io { path: path.as_ref().to_path_buf(), source }
    }
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub lines_read: usize,
    pub lines_written: usize,
    /// Marking moves demoted to travel moves.
    pub reclassified: usize,
    /// Redundant travel moves dropped.
    pub elided: usize,
}

pub struct LineTransformer {
    config: MaskConfig,
    matcher: MarkingMoveMatcher,
    reclassifier: Reclassifier,
}

impl LineTransformer {
    pub fn new(config: MaskConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let matcher = MarkingMoveMatcher::new(&config)?;
        let reclassifier = Reclassifier::new(&config);
        Ok(Self { config, matcher, reclassifier })
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// Streams `reader` into `writer`. `source` and `sink` only name the two
    /// ends in error messages.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
        source: &Path,
        sink: &Path,
    ) -> Result<TransformStats, MaskError> {
        let mut stats = TransformStats::default();
        let mut elider = RedundancyElider::new(
            self.config.travel_code.clone(),
            self.config.essential_words.clone(),
        );
        let mut buf = String::new();

        loop {
            buf.clear();
            let bytes = reader.read_line(&mut buf).map_err(|e| MaskError::io(source, e))?;
            if bytes == 0 {
                break;
            }
            stats.lines_read += 1;

            let found = self.matcher.parse(&buf, stats.lines_read)?;
            let out = self.reclassifier.apply(&buf, found.as_ref());
            if out.changed {
                stats.reclassified += 1;
                tracing::debug!("line {}: demoted to travel: {}", stats.lines_read, out.line.trim_end());
            }

            match elider.push(out.line) {
                Elision::Buffered => {}
                Elision::Emit(previous) => {
                    writer.write_all(previous.as_bytes()).map_err(|e| MaskError::io(sink, e))?;
                    stats.lines_written += 1;
                }
                Elision::Dropped(previous) => {
                    stats.elided += 1;
                    tracing::debug!("line {}: dropped redundant travel: {}", stats.lines_read - 1, previous.trim_end());
                }
            }
        }

        if let Some(last) = elider.flush() {
            writer.write_all(last.as_bytes()).map_err(|e| MaskError::io(sink, e))?;
            stats.lines_written += 1;
        }
        writer.flush().map_err(|e| MaskError::io(sink, e))?;
        Ok(stats)
    }

    /// Transforms `input` into `output`. The result is staged in an anonymous
    /// temporary file and `output` is only created or truncated once the
    /// whole pass has succeeded, so a failed pass leaves it untouched.
    /// Writing through `File::create` keeps the mode of an existing output
    /// and follows symlinks.
    pub fn transform_file(&self, input: &Path, output: &Path) -> Result<TransformStats, MaskError> {
        let source = File::open(input).map_err(|e| MaskError::io(input, e))?;
        let mut staged = tempfile::tempfile().map_err(|e| MaskError::io(output, e))?;

        let stats = self.run(BufReader::new(source), BufWriter::new(&mut staged), input, output)?;

        staged.seek(SeekFrom::Start(0)).map_err(|e| MaskError::io(output, e))?;
        let mut sink = File::create(output).map_err(|e| MaskError::io(output, e))?;
        io::copy(&mut staged, &mut sink).map_err(|e| MaskError::io(output, e))?;
        sink.flush().map_err(|e| MaskError::io(output, e))?;
        tracing::info!(
            "Masked {} -> {}: {} lines read, {} written, {} reclassified, {} elided",
            input.display(),
            output.display(),
            stats.lines_read,
            stats.lines_written,
            stats.reclassified,
            stats.elided
        );
        Ok(stats)
    }
}

/// Convenience wrapper building a [`LineTransformer`] for a single file.
pub fn transform_file(input: &Path, output: &Path, config: &MaskConfig) -> Result<TransformStats, MaskError> {
    LineTransformer::new(config.clone())?.transform_file(input, output)
}
