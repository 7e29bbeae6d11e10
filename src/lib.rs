//! # Carpetline - Carpet Area Calculator
//!
//! Computes usable ("carpet") floor area from a built-up area and a deduction,
//! and the area of common 2-D shapes so a floor plan can feed the built-up area.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   args    ┌──────────────┐  requests  ┌──────────────────┐
//! │  cmd_args   │──────────►│  Calculator  │───────────►│  engine::shape   │
//! │  profile    │           │              │            │  engine::carpet  │
//! └─────────────┘           └──────────────┘◄───────────└──────────────────┘
//!                                  │          results / failures
//!                                  ▼
//!                           ┌──────────────┐
//!                           │    output    │
//!                           └──────────────┘
//! ```
//!
//! The engines are pure functions over immutable requests. Everything stateful
//! (raw field text, selected shape, last result) lives in [`Calculator`].

pub mod app;
pub mod calculator;
pub mod cmd_args;
pub mod config;
pub mod engine;
pub mod logging;
pub mod output;
pub mod profile;

// Re-export main types for easy access
pub use calculator::Calculator;
pub use engine::*;
