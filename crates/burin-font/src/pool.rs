//! Stroke-font registry.
//!
//! An explicit name -> font map owned by the document/session context
//! that created it, passed by reference to collaborators. Deliberately
//! not ambient global state.

use crate::loader::StrokeFont;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct StrokeFontPool {
    fonts: HashMap<String, Arc<StrokeFont>>,
    default_name: Option<String>,
}

impl StrokeFontPool {
    pub fn new() -> Self {
        StrokeFontPool::default()
    }

    /// Register a font under its own name. The first font registered
    /// becomes the pool default.
    pub fn insert(&mut self, font: StrokeFont) -> Arc<StrokeFont> {
        let name = font.name().to_owned();
        let font = Arc::new(font);
        if self.default_name.is_none() {
            self.default_name = Some(name.clone());
        }
        self.fonts.insert(name, Arc::clone(&font));
        font
    }

    pub fn get(&self, name: &str) -> Option<Arc<StrokeFont>> {
        self.fonts.get(name).cloned()
    }

    /// The default stroke font, if any font has been registered.
    pub fn default_font(&self) -> Option<Arc<StrokeFont>> {
        self.default_name.as_deref().and_then(|name| self.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
