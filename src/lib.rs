use std::sync::Arc;

use crate::notes::store::NoteStore;

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod notes;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NoteStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }
}
