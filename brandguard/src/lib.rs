// brandguard/src/lib.rs
//! # BrandGuard CLI Application
//!
//! This crate provides the command-line interface for the BrandGuard compliance
//! engine: validating, repairing and gating generated copy from files or pipes.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
