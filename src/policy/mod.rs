//! Process-level configuration.
//!
//! Consumers typically start from [`Policy::agent_skills_preset`] (also the
//! `Default`) and adjust fields before creating a [`Linkyard`](crate::Linkyard).

pub mod config;

pub use config::Policy;
