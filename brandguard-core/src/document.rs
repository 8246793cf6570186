// File: brandguard-core/src/document.rs
//! Field-by-field compliance for generated documents (blog posts, press releases, pages).
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine::ComplianceEngine;
use crate::errors::BrandGuardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    BlogPost,
    PressRelease,
    Page,
}

/// The user-facing text fields of one generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub kind: ContentKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub body: String,
}

fn ensure_field<E: ComplianceEngine + ?Sized>(engine: &E, field: &str, value: &str) -> Result<String, BrandGuardError> {
    engine.ensure(value).map_err(|e| match e {
        BrandGuardError::NonCompliantContent { errors } => BrandGuardError::FieldNonCompliant {
            field: field.to_string(),
            errors,
        },
        other => other,
    })
}

/// Runs the compliance orchestrator on every present field, in the order title,
/// subtitle, excerpt, body. The first field that cannot be repaired aborts the whole
/// document with `BrandGuardError::FieldNonCompliant`.
pub fn ensure_document_compliance<E: ComplianceEngine + ?Sized>(
    engine: &E,
    document: GeneratedContent,
) -> Result<GeneratedContent, BrandGuardError> {
    debug!("Checking {:?} document '{}'.", document.kind, document.title);

    let title = ensure_field(engine, "title", &document.title)?;
    let subtitle = document
        .subtitle
        .as_deref()
        .map(|s| ensure_field(engine, "subtitle", s))
        .transpose()?;
    let excerpt = document
        .excerpt
        .as_deref()
        .map(|s| ensure_field(engine, "excerpt", s))
        .transpose()?;
    let body = ensure_field(engine, "body", &document.body)?;

    Ok(GeneratedContent {
        kind: document.kind,
        title,
        subtitle,
        excerpt,
        body,
    })
}
