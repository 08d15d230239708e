use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::canvas::Canvas;

/// Keeps one GPU texture in sync with the raster a screen presents.
///
/// The raster is re-uploaded only when its revision differs from the one
/// last uploaded.
pub struct TextureManager {
    name: String,
    texture: Option<TextureHandle>,
    /// Revision of the raster currently held by the texture
    uploaded_revision: Option<u64>,
    uploads: u64,
}

impl TextureManager {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            texture: None,
            uploaded_revision: None,
            uploads: 0,
        }
    }

    /// Gets the texture showing `canvas`, uploading it first if it changed
    pub fn texture_for(&mut self, canvas: &Canvas, ctx: &Context) -> TextureId {
        let revision = canvas.revision();

        if self.uploaded_revision == Some(revision) {
            if let Some(handle) = &self.texture {
                return handle.id();
            }
        }

        let image = canvas.to_color_image();
        match self.texture.as_mut() {
            Some(handle) => handle.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture(&self.name, image, TextureOptions::NEAREST));
            }
        }

        self.uploaded_revision = Some(revision);
        self.uploads += 1;
        log::debug!("Uploaded {} revision {}", self.name, revision);

        self.texture
            .as_ref()
            .map_or(TextureId::default(), TextureHandle::id)
    }

    /// Number of uploads so far
    pub fn upload_count(&self) -> u64 {
        self.uploads
    }
}
