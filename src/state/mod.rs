/// State management module
/// 
/// This module handles all application state, including:
/// - The picture record shared by every layer (data.rs)
/// - The in-memory ordered collection and its change events (store.rs)
/// - The built-in sample catalog and new-picture generation (catalog.rs)

pub mod catalog;
pub mod data;
pub mod store;
