//! Emotion Furnace - backend for the emotional furnace
//!
//! Classifies a short piece of user text into one of five emotional labels,
//! pairs it with a healing metaphor and background music, and falls back to
//! a deterministic keyword classifier whenever the upstream model is absent
//! or misbehaves.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
