#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod error;
pub mod icons;
pub mod models;
pub mod project;
pub mod step;

pub use config::IconSpriteConfig;
pub use error::{IconSourceError, StepError, StepResult};
pub use models::{IconReferenceSet, IconSymbol, SpriteRefresh};
pub use project::{IconSpriteLayout, SetupContext, SpritePaths};
pub use step::{IconSpriteStep, SetupStep};
