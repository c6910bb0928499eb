//! Attribute path grammar.
//!
//! A path is a `.`-separated list of names. A leading `data` marks a data
//! source reference and any segment may end in `[]` to address the element
//! of a collection instead of the collection itself:
//!
//! ```text
//! data.aws_ami.id
//! aws_instance.tags[]
//! aws.instance.ebs_block_device.device_name
//! ```

use tfschema_model::ResourceKind;

const DATA_MARKER: &str = "data";
const INDEX_MARKER: &str = "[]";

/// One component of an attribute path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'p> {
    /// Name with any `[]` marker removed.
    pub name: &'p str,
    /// Whether the raw segment carried a trailing `[]`.
    pub indexed: bool,
}

impl<'p> Segment<'p> {
    pub fn parse(raw: &'p str) -> Self {
        match raw.strip_suffix(INDEX_MARKER) {
            Some(name) => Self {
                name,
                indexed: true,
            },
            None => Self {
                name: raw,
                indexed: false,
            },
        }
    }
}

/// A parsed attribute path with the `data` marker split off.
///
/// Segments are immutable once parsed; resolution steps hand each other
/// sub-slices of [`segments`](Self::segments) rather than consuming a shared list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePath<'p> {
    data_source: bool,
    segments: Vec<Segment<'p>>,
}

impl<'p> AttributePath<'p> {
    /// Split `path` into segments.
    ///
    /// Returns `None` for paths with fewer than two segments (counted before
    /// the `data` marker is removed) or with an empty segment.
    pub fn parse(path: &'p str) -> Option<Self> {
        let raw: Vec<&'p str> = path.split('.').collect();
        if raw.len() < 2 {
            return None;
        }

        let data_source = raw[0] == DATA_MARKER;
        let skip = usize::from(data_source);
        let segments: Vec<Segment<'p>> = raw[skip..].iter().map(|&s| Segment::parse(s)).collect();
        if segments.iter().any(|s| s.name.is_empty()) {
            return None;
        }

        Some(Self {
            data_source,
            segments,
        })
    }

    pub fn is_data_source(&self) -> bool {
        self.data_source
    }

    pub fn resource_kind(&self) -> ResourceKind {
        if self.data_source {
            ResourceKind::DataSource
        } else {
            ResourceKind::Managed
        }
    }

    /// Segments following the `data` marker, if any.
    pub fn segments(&self) -> &[Segment<'p>] {
        &self.segments
    }
}
