//! In-memory STEP model with lookup by instance id and by type.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::entity::{Entity, Record};
use super::header::Header;
use super::parser;
use crate::util::{Error, Result};

/// A parsed STEP/IFC file.
///
/// Immutable after construction. Entities keep their file order.
#[derive(Debug)]
pub struct StepModel {
    header: Header,
    entities: Vec<Entity>,
    by_id: HashMap<u64, usize>,
    /// Upper-cased type name -> (entity position, record position), in file order.
    /// Complex instances are listed under every partial type.
    by_type: HashMap<String, Vec<(usize, usize)>>,
}

impl StepModel {
    /// Open a file for reading with memory mapping.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_opts(path, cfg!(feature = "mmap"))
    }

    /// Open a file with optional memory mapping.
    ///
    /// A missing file fails with [`Error::FileNotFound`] before any parsing.
    pub fn open_opts(path: impl AsRef<Path>, use_mmap: bool) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let size = file.metadata()?.len();
        tracing::debug!("opening {} ({} bytes, mmap={})", path.display(), size, use_mmap);

        #[cfg(feature = "mmap")]
        if use_mmap && size > 0 {
            // Safety: File is opened read-only and the map is dropped before returning
            let mmap = unsafe { memmap2::Mmap::map(&file) }
                .map_err(|e| Error::MmapFailed(e.to_string()))?;
            return Self::from_bytes(&mmap);
        }
        #[cfg(not(feature = "mmap"))]
        let _ = use_mmap;

        let mut data = Vec::with_capacity(size as usize);
        file.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Parse raw file contents.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let file = parser::parse(data)?;
        Self::from_parts(file.header, file.entities)
    }

    /// Build a model from already parsed entities.
    pub fn from_parts(header: Header, entities: Vec<Entity>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(entities.len());
        let mut by_type: HashMap<String, Vec<(usize, usize)>> = HashMap::new();

        for (pos, entity) in entities.iter().enumerate() {
            if by_id.insert(entity.id, pos).is_some() {
                return Err(Error::DuplicateEntity(entity.id));
            }
            for (slot, record) in entity.records.iter().enumerate() {
                by_type.entry(record.name.to_ascii_uppercase()).or_default().push((pos, slot));
            }
        }

        tracing::debug!("indexed {} entities of {} types", entities.len(), by_type.len());
        Ok(Self { header, entities, by_id, by_type })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Number of entity instances.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Instance by `#id`.
    pub fn entity(&self, id: u64) -> Option<&Entity> {
        self.by_id.get(&id).map(|&pos| &self.entities[pos])
    }

    /// All instances in file order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Records of the given type (ASCII case-insensitive) with their instance id,
    /// in file order. For complex instances this is the matching partial record.
    pub fn records_of_type(&self, type_name: &str) -> impl Iterator<Item = (u64, &Record)> + '_ {
        self.by_type
            .get(&type_name.to_ascii_uppercase())
            .into_iter()
            .flatten()
            .map(|&(pos, slot)| {
                let entity = &self.entities[pos];
                (entity.id, &entity.records[slot])
            })
    }

    /// Instance count per type name, sorted by name.
    pub fn type_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .by_type
            .iter()
            .map(|(name, positions)| (name.as_str(), positions.len()))
            .collect();
        counts.sort_unstable();
        counts
    }
}
