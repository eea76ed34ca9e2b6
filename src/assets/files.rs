use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::assets::decode::{decode_target, decode_texture};
use crate::foundation::error::{PaintError, PaintResult};
use crate::raster::buffer::PixelBuffer;
use crate::texture::set::TextureSet;

const TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp"];

/// Read and prepare a still target image.
pub fn load_target(path: impl AsRef<Path>, computation_size: u32) -> PaintResult<PixelBuffer> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("read target '{}'", path.display()))?;
    decode_target(&bytes, computation_size)
}

/// Load textures from explicit files, each named by its file stem.
pub fn load_textures(paths: &[PathBuf]) -> PaintResult<TextureSet> {
    let mut set = TextureSet::new();
    for path in paths {
        let bytes =
            std::fs::read(path).with_context(|| format!("read texture '{}'", path.display()))?;
        let texture = decode_texture(&bytes)
            .map_err(|e| PaintError::texture(format!("'{}': {e}", path.display())))?;
        set.insert(texture_name(path)?, texture)?;
    }
    Ok(set)
}

/// Load every image file directly inside `dir`, in file-name order.
pub fn load_texture_dir(dir: impl AsRef<Path>) -> PaintResult<TextureSet> {
    let dir = dir.as_ref();
    let mut paths = Vec::new();
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("read texture dir '{}'", dir.display()))?
    {
        let path = entry
            .with_context(|| format!("list texture dir '{}'", dir.display()))?
            .path();
        let is_image = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| TEXTURE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
        if path.is_file() && is_image {
            paths.push(path);
        }
    }
    paths.sort();
    if paths.is_empty() {
        return Err(PaintError::texture(format!(
            "no texture images found in '{}'",
            dir.display()
        )));
    }
    load_textures(&paths)
}

fn texture_name(path: &Path) -> PaintResult<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_owned)
        .ok_or_else(|| PaintError::texture(format!("texture path '{}' has no usable name", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/files.rs"]
mod tests;
