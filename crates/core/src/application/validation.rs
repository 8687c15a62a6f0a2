//! Creation payload validation
//!
//! Rejects malformed payloads before any store call. Only the first violated
//! rule is reported, as a single human-readable message.

use crate::domain::id::is_valid_id;
use crate::domain::{EntityId, EntityName, NotionId};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const REFERENCE_PATTERN: &str = "/^[0-9a-fA-F]{24}$/";

/// Create-notion payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotionRequest {
    pub name: String,
}

/// Create-workshop payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkshopRequest {
    pub name: String,

    /// Missing is the same as empty
    #[serde(default)]
    pub notions: Vec<String>,
}

/// Notion payload that passed validation
#[derive(Debug, Clone)]
pub struct ValidNotion {
    pub name: EntityName,
}

/// Workshop payload that passed validation
#[derive(Debug, Clone)]
pub struct ValidWorkshop {
    pub name: EntityName,
    pub notions: Vec<NotionId>,
}

impl CreateNotionRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Validate a raw JSON object (shape and rules, field by field)
    pub fn from_json(value: Value) -> Result<Self> {
        let mut fields = into_object(value)?;
        let name = take_name(&mut fields)?;
        reject_unknown(&fields)?;
        Ok(Self { name })
    }

    pub fn validate(&self) -> Result<ValidNotion> {
        Ok(ValidNotion {
            name: check_name(&self.name)?,
        })
    }
}

impl CreateWorkshopRequest {
    pub fn new(name: impl Into<String>, notions: Vec<String>) -> Self {
        Self {
            name: name.into(),
            notions,
        }
    }

    /// Validate a raw JSON object (shape and rules, field by field)
    pub fn from_json(value: Value) -> Result<Self> {
        let mut fields = into_object(value)?;
        let name = take_name(&mut fields)?;

        let notions = match fields.remove("notions") {
            None => Vec::new(),
            Some(Value::Array(items)) => {
                let mut refs = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    match item {
                        Value::String(raw) => {
                            check_reference(index, &raw)?;
                            refs.push(raw);
                        }
                        _ => {
                            return Err(AppError::Validation(format!(
                                "\"notions[{}]\" must be a string",
                                index
                            )))
                        }
                    }
                }
                refs
            }
            Some(_) => {
                return Err(AppError::Validation(
                    "\"notions\" must be an array".to_string(),
                ))
            }
        };

        reject_unknown(&fields)?;
        Ok(Self { name, notions })
    }

    pub fn validate(&self) -> Result<ValidWorkshop> {
        let name = check_name(&self.name)?;
        let notions = self
            .notions
            .iter()
            .enumerate()
            .map(|(index, raw)| check_reference(index, raw))
            .collect::<Result<Vec<_>>>()?;
        Ok(ValidWorkshop { name, notions })
    }
}

fn check_name(raw: &str) -> Result<EntityName> {
    Ok(EntityName::parse(raw)?)
}

fn check_reference(index: usize, raw: &str) -> Result<NotionId> {
    if !is_valid_id(raw) {
        return Err(AppError::Validation(format!(
            "\"notions[{}]\" with value \"{}\" fails to match the required pattern: {}",
            index, raw, REFERENCE_PATTERN
        )));
    }
    Ok(EntityId::parse(raw)?)
}

fn into_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(fields) => Ok(fields),
        _ => Err(AppError::Validation(
            "\"value\" must be of type object".to_string(),
        )),
    }
}

fn take_name(fields: &mut Map<String, Value>) -> Result<String> {
    match fields.remove("name") {
        None => Err(AppError::Validation("\"name\" is required".to_string())),
        Some(Value::String(raw)) => {
            check_name(&raw)?;
            Ok(raw)
        }
        Some(_) => Err(AppError::Validation(
            "\"name\" must be a string".to_string(),
        )),
    }
}

fn reject_unknown(fields: &Map<String, Value>) -> Result<()> {
    match fields.keys().next() {
        Some(key) => Err(AppError::Validation(format!(
            "\"{}\" is not allowed",
            key
        ))),
        None => Ok(()),
    }
}
