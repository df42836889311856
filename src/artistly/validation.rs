//! Onboarding form validation.
//!
//! An [`ArtistApplication`] holds the form exactly as entered. Validation turns
//! it either into a typed [`ValidApplication`] or into a [`Verdict`] listing
//! every failing field with a message meant for the person filling the form.

use crate::error::{ArtistlyError, Result};
use crate::model::{Category, Label, Language, PriceRange};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_BIO_CHARS: usize = 50;
pub const MIN_LOCATION_CHARS: usize = 2;
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArtistApplication {
    pub name: String,
    pub bio: String,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub fee_range: Option<String>,
    pub location: String,
    pub profile_image: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Bio,
    Categories,
    Languages,
    FeeRange,
    Location,
    ProfileImage,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Bio => "bio",
            Field::Categories => "categories",
            Field::Languages => "languages",
            Field::FeeRange => "feeRange",
            Field::Location => "location",
            Field::ProfileImage => "profileImage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Pass/fail outcome with the field-level messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub errors: Vec<FieldError>,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn message_for(&self, field: &Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| &e.field == field)
            .map(|e| e.message.as_str())
    }

    fn fail(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field.as_str(), e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// An application that passed validation, with every label resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidApplication {
    pub name: String,
    pub bio: String,
    pub categories: Vec<Category>,
    pub languages: Vec<Language>,
    pub fee_range: PriceRange,
    pub location: String,
    pub profile_image: Option<PathBuf>,
}

impl ArtistApplication {
    pub fn verdict(&self) -> Verdict {
        match self.resolve() {
            Ok(_) => Verdict::default(),
            Err(verdict) => verdict,
        }
    }

    pub fn validate(&self) -> Result<ValidApplication> {
        self.resolve().map_err(ArtistlyError::Validation)
    }

    fn resolve(&self) -> std::result::Result<ValidApplication, Verdict> {
        let mut verdict = Verdict::default();

        if self.name.chars().count() < MIN_NAME_CHARS {
            verdict.fail(Field::Name, "Name must be at least 2 characters");
        }
        if self.bio.chars().count() < MIN_BIO_CHARS {
            verdict.fail(Field::Bio, "Bio must be at least 50 characters");
        }

        let categories = resolve_labels::<Category>(&self.categories);
        match &categories {
            Ok(list) if list.is_empty() => {
                verdict.fail(Field::Categories, "Select at least one category")
            }
            Ok(_) => {}
            Err(bad) => verdict.fail(Field::Categories, format!("Unknown category: {}", bad)),
        }

        let languages = resolve_labels::<Language>(&self.languages);
        match &languages {
            Ok(list) if list.is_empty() => {
                verdict.fail(Field::Languages, "Select at least one language")
            }
            Ok(_) => {}
            Err(bad) => verdict.fail(Field::Languages, format!("Unknown language: {}", bad)),
        }

        let fee_range = match self.fee_range.as_deref() {
            None | Some("") => {
                verdict.fail(Field::FeeRange, "Please select a fee range");
                None
            }
            Some(raw) => {
                let parsed = PriceRange::from_label(raw);
                if parsed.is_none() {
                    verdict.fail(Field::FeeRange, format!("Unknown fee range: {}", raw));
                }
                parsed
            }
        };

        if self.location.chars().count() < MIN_LOCATION_CHARS {
            verdict.fail(Field::Location, "Location is required");
        }

        if let Some(path) = &self.profile_image {
            if !is_supported_image(path) {
                verdict.fail(Field::ProfileImage, "Profile image must be a PNG, JPG or GIF");
            }
        }

        match (categories, languages, fee_range) {
            (Ok(categories), Ok(languages), Some(fee_range)) if verdict.passed() => {
                Ok(ValidApplication {
                    name: self.name.clone(),
                    bio: self.bio.clone(),
                    categories,
                    languages,
                    fee_range,
                    location: self.location.clone(),
                    profile_image: self.profile_image.clone(),
                })
            }
            _ => Err(verdict),
        }
    }
}

/// Resolves checkbox-style selections, dropping repeats. Returns the first
/// label outside the enumeration as the error.
fn resolve_labels<T: Label>(raw: &[String]) -> std::result::Result<Vec<T>, String> {
    let mut resolved: Vec<T> = Vec::with_capacity(raw.len());
    for label in raw {
        let value = T::from_label(label).ok_or_else(|| label.clone())?;
        if !resolved.contains(&value) {
            resolved.push(value);
        }
    }
    Ok(resolved)
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
