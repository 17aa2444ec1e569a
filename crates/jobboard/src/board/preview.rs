//! Session-local image previews.
//!
//! Picking a file yields an opaque `preview://<uuid>` reference. The
//! reference is stored with the job, but only this registry knows which file
//! it points at, so it stops resolving once the session ends.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::model::ImageRef;

const SCHEME: &str = "preview://";

#[derive(Debug, Default)]
pub struct PreviewRegistry {
    entries: HashMap<ImageRef, PathBuf>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `path` and returns a fresh reference to it.
    pub fn register(&mut self, path: impl AsRef<Path>) -> ImageRef {
        let image = ImageRef::new(format!("{}{}", SCHEME, Uuid::new_v4()));
        self.entries
            .insert(image.clone(), path.as_ref().to_path_buf());
        image
    }

    /// The file behind `image`, if it was registered in this session.
    pub fn resolve(&self, image: &ImageRef) -> Option<&Path> {
        self.entries.get(image).map(PathBuf::as_path)
    }

    pub fn is_preview_ref(image: &ImageRef) -> bool {
        image.as_str().starts_with(SCHEME)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let mut registry = PreviewRegistry::new();
        let image = registry.register("/tmp/render.png");

        assert!(PreviewRegistry::is_preview_ref(&image));
        assert_eq!(registry.resolve(&image), Some(Path::new("/tmp/render.png")));
    }

    #[test]
    fn test_references_are_unique() {
        let mut registry = PreviewRegistry::new();
        let a = registry.register("/tmp/a.png");
        let b = registry.register("/tmp/a.png");
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_foreign_reference_does_not_resolve() {
        let registry = PreviewRegistry::new();
        let stale = ImageRef::new("preview://00000000-0000-0000-0000-000000000000");
        assert!(registry.resolve(&stale).is_none());
        assert!(!PreviewRegistry::is_preview_ref(&ImageRef::new("blob:abc")));
    }
}
