//! Persisted artwork
//!
//! Line art is stored as JSON in one of two shapes:
//!
//! - monochrome: `[[[x, y], ...], ...]`, a list of paths
//! - separated: four such lists, one per ink, in the order
//!   cyan, yellow, magenta, black
//!
//! The shape is told apart by the nesting depth of the first coordinate
//! found in the document.

use serde_json::Value;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path as FsPath;
use stringplot_core::{Error, FormatError, Path, PathCollection, PathError, Point, Result};

/// Ink of one pass of a separated drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Cyan,
    Yellow,
    Magenta,
    Black,
}

impl Channel {
    /// Order of the channels in a separated document, which is also the
    /// order they are drawn in
    pub const ALL: [Channel; 4] = [Self::Cyan, Self::Yellow, Self::Magenta, Self::Black];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cyan => write!(f, "cyan"),
            Self::Yellow => write!(f, "yellow"),
            Self::Magenta => write!(f, "magenta"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// A drawing ready to be plotted
#[derive(Debug, Clone, PartialEq)]
pub enum Artwork {
    /// One pen, one pass
    Monochrome(PathCollection),
    /// One pass per channel, indexed like [`Channel::ALL`]
    Separated([PathCollection; 4]),
}

impl Artwork {
    /// Read an artwork file
    pub fn load(path: &FsPath) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let value: Value = serde_json::from_reader(reader)?;
        let artwork = Self::from_value(&value)?;
        tracing::info!(
            "Loaded {} from {}",
            artwork.describe(),
            path.display()
        );
        Ok(artwork)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(&value)
    }

    /// Interpret an already parsed JSON document
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Array(top) = value else {
            return Err(unknown(format!("expected an array, found {}", kind(value))));
        };

        match first_number_depth(value) {
            // nothing numeric anywhere: an empty drawing, or empty paths
            None | Some(3) => Ok(Self::Monochrome(parse_collection(top, None)?)),
            Some(4) if top.len() == 4 => {
                let mut channels: [PathCollection; 4] = Default::default();
                for ((slot, channel), raw) in channels.iter_mut().zip(Channel::ALL).zip(top) {
                    let Value::Array(paths) = raw else {
                        return Err(unknown(format!(
                            "{} channel is {}, not a list of paths",
                            channel,
                            kind(raw)
                        )));
                    };
                    *slot = parse_collection(paths, Some(channel))?;
                }
                Ok(Self::Separated(channels))
            }
            Some(4) => Err(unknown(format!(
                "found {} channels, separated artwork has 4",
                top.len()
            ))),
            Some(depth) => Err(unknown(format!(
                "coordinates nested {} levels deep",
                depth
            ))),
        }
    }

    /// Write the artwork in the shape [`Artwork::load`] reads
    pub fn save(&self, path: &FsPath) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        match self {
            Self::Monochrome(paths) => serde_json::to_writer(&mut writer, paths)?,
            Self::Separated(channels) => serde_json::to_writer(&mut writer, channels)?,
        }
        writer.flush()?;
        Ok(())
    }

    /// The passes to draw, each with its channel (`None` for monochrome)
    pub fn passes(&self) -> Vec<(Option<Channel>, &PathCollection)> {
        match self {
            Self::Monochrome(paths) => vec![(None, paths)],
            Self::Separated(channels) => Channel::ALL
                .iter()
                .zip(channels)
                .map(|(c, paths)| (Some(*c), paths))
                .collect(),
        }
    }

    /// Total number of paths over all passes
    pub fn path_count(&self) -> usize {
        self.passes().iter().map(|(_, p)| p.len()).sum()
    }

    fn describe(&self) -> String {
        match self {
            Self::Monochrome(paths) => format!("monochrome artwork ({} paths)", paths.len()),
            Self::Separated(_) => format!("CMYK artwork ({} paths)", self.path_count()),
        }
    }
}

fn unknown(reason: String) -> Error {
    FormatError::UnknownFormat { reason }.into()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Depth of the first number met in document order, counting the top level
/// array as depth 0
fn first_number_depth(value: &Value) -> Option<usize> {
    match value {
        Value::Number(_) => Some(0),
        Value::Array(items) => items
            .iter()
            .find_map(first_number_depth)
            .map(|depth| depth + 1),
        _ => None,
    }
}

fn parse_collection(raw: &[Value], channel: Option<Channel>) -> Result<PathCollection> {
    raw.iter()
        .enumerate()
        .map(|(i, path)| parse_path(i, path, channel).map_err(Error::from))
        .collect()
}

fn parse_path(index: usize, raw: &Value, channel: Option<Channel>) -> std::result::Result<Path, PathError> {
    let malformed = |reason: String| PathError::Malformed {
        path: index,
        reason: match channel {
            Some(c) => format!("{} channel, {}", c, reason),
            None => reason,
        },
    };

    let Value::Array(vertices) = raw else {
        return Err(malformed(format!("expected a list of points, found {}", kind(raw))));
    };

    vertices
        .iter()
        .enumerate()
        .map(|(j, v)| match v.as_array().map(Vec::as_slice) {
            Some([x, y]) => match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => Ok(Point::new(x, y)),
                _ => Err(malformed(format!("vertex {} has a non-numeric coordinate", j))),
            },
            _ => Err(malformed(format!("vertex {} is not an [x, y] pair", j))),
        })
        .collect()
}
