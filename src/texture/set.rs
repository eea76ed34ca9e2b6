use std::sync::Arc;

use rand::Rng;

use crate::foundation::error::{PaintError, PaintResult};
use crate::texture::descriptor::TextureDescriptor;

/// Ordered collection of uniquely named stroke textures.
///
/// Descriptors are held behind [`Arc`] so a set can be cloned cheaply into concurrent
/// frame workers.
#[derive(Clone, Debug, Default)]
pub struct TextureSet {
    entries: Vec<(String, Arc<TextureDescriptor>)>,
}

impl TextureSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a texture under `name`. Names must be unique and non-empty.
    pub fn insert(&mut self, name: impl Into<String>, texture: TextureDescriptor) -> PaintResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(PaintError::texture("texture name must be non-empty"));
        }
        if self.get(&name).is_some() {
            return Err(PaintError::texture(format!("duplicate texture name '{name}'")));
        }
        self.entries.push((name, Arc::new(texture)));
        Ok(())
    }

    /// Number of textures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no texture has been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look a texture up by name.
    pub fn get(&self, name: &str) -> Option<&Arc<TextureDescriptor>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t)
    }

    /// Iterate names and textures in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<TextureDescriptor>)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t))
    }

    /// Pick a texture uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(&str, &Arc<TextureDescriptor>)> {
        if self.entries.is_empty() {
            return None;
        }
        let (name, tex) = &self.entries[rng.random_range(0..self.entries.len())];
        Some((name.as_str(), tex))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/set.rs"]
mod tests;
