//! UI module - shared rendering components
//!
//! This module collects widgets used by more than one screen,
//! such as status chips, field rows and key-bar hints.

pub mod components;
