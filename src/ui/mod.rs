//! UI module - painter-based widgets shared by the pages

pub mod components;
