use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

/// Image files directly under `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && IMAGE_EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("no image files found in {}", dir.display());
    }
    Ok(paths)
}

/// EXIF orientation tag of a JPEG, if it carries one.
pub fn read_orientation(bytes: &[u8]) -> Option<u16> {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            debug!("no EXIF data: {e}");
            return None;
        }
    };
    match &exif.get_field(Tag::Orientation, In::PRIMARY)?.value {
        Value::Short(values) => values.first().copied(),
        _ => None,
    }
}

/// Clockwise quarter turns that undo an EXIF orientation. Mirrored
/// orientations are shown unrotated.
pub fn quarter_turns(orientation: u16) -> u8 {
    match orientation {
        3 => 2,
        6 => 1,
        8 => 3,
        _ => 0,
    }
}

/// Loads an image, applies its EXIF rotation and uploads it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path).with_context(|| format!("failed to read {}", image_path.display()))?;

    let extension = extension_of(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(&file_bytes).unwrap_or(1)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {}: {e}", image_path.display()))?;

    match quarter_turns(orientation) {
        1 => image.rotate_cw(),
        2 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        3 => image.rotate_ccw(),
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {}: {e}", image_path.display()))?;
    if orientation != 1 {
        debug!(path = %image_path.display(), orientation, "applied EXIF rotation");
    }

    Ok(texture)
}

/// Loads every path, skipping the ones that fail.
pub fn load_textures(rl: &mut RaylibHandle, thread: &RaylibThread, paths: &[PathBuf]) -> Vec<Texture2D> {
    let mut textures = Vec::with_capacity(paths.len());
    for path in paths {
        match load_texture_with_exif_rotation(rl, thread, path) {
            Ok(texture) => textures.push(texture),
            Err(e) => warn!("skipping image: {e:#}"),
        }
    }
    textures
}
