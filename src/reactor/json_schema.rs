//! JSON Schema generation for reactor description files.
//!
//! Emits a Draft-07 schema for `reactor.yml` so editors can offer
//! completion and validation.

use serde_json::{json, Value};

/// Generates JSON Schema for the reactor description format.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for reactor.yml.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "Reactor Description",
            "description": "Modules of a multi-module build and their declared dependencies",
            "type": "object",
            "properties": {
                "group": {
                    "type": "string",
                    "description": "Default group for modules and dependencies"
                },
                "version": {
                    "type": "string",
                    "description": "Default version for modules and dependencies"
                },
                "top_level": {
                    "type": "string",
                    "description": "Root module reference: artifact, group:artifact, or group:artifact:packaging"
                },
                "modules": {
                    "type": "array",
                    "description": "Modules in build order",
                    "items": self.module_schema()
                }
            },
            "required": ["top_level", "modules"],
            "additionalProperties": false
        })
    }

    fn module_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "group": { "type": "string" },
                "artifact": { "type": "string" },
                "version": { "type": "string" },
                "packaging": {
                    "type": "string",
                    "default": "jar",
                    "description": "Packaging type, e.g. jar, pom, war"
                },
                "dependencies": {
                    "type": "array",
                    "description": "Declared dependencies",
                    "items": self.dependency_schema()
                },
                "depend_on_all": self.rule_schema()
            },
            "required": ["artifact"],
            "additionalProperties": false
        })
    }

    fn dependency_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "group": { "type": "string" },
                "artifact": { "type": "string" },
                "version": { "type": "string" },
                "type": {
                    "type": "string",
                    "default": "jar"
                }
            },
            "required": ["artifact"],
            "additionalProperties": false
        })
    }

    /// Schema for the rule parameter block.
    fn rule_schema(&self) -> Value {
        let flag = json!({
            "type": ["boolean", "string"],
            "default": false
        });
        json!({
            "type": "object",
            "description": "Require this module to depend on every in-scope reactor module",
            "properties": {
                "includes": {
                    "type": "array",
                    "items": { "type": "string" },
                    "default": ["*"],
                    "description": "Selectors for modules in scope"
                },
                "excludes": {
                    "type": "array",
                    "items": { "type": "string" },
                    "default": [],
                    "description": "Selectors for modules taken out of scope"
                },
                "error_if_unknown_selector": flag.clone(),
                "include_root_module": flag
            },
            "additionalProperties": false
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
