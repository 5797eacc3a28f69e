//! The requirement catalog.
//!
//! Everything the checks iterate over is data, not code: the interpreter
//! floor, the package list, the required and optional configuration keys,
//! and the expected sample files. The built-in defaults reproduce the
//! workshop's lists, and a `labready.yml` in the project root (or a
//! `--catalog` path) can replace any section for a different curriculum.
//!
//! ```yaml
//! runtime:
//!   command: python3
//!   min_major: 3
//!   min_minor: 8
//! packages:
//!   - module: openai
//!     label: Azure OpenAI SDK
//! required_vars: [AZURE_OPENAI_ENDPOINT, AZURE_OPENAI_API_KEY]
//! optional_groups:
//!   - name: Lab 2
//!     keys: [SPEECH_KEY, SPEECH_REGION]
//! sample_files: [samples/audio001.wav]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LabreadyError, Result};

/// Catalog file looked up in the project root when `--catalog` is not given.
pub const CATALOG_FILE_NAME: &str = "labready.yml";

/// Interpreter command and minimum version floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Command used to invoke the workshop interpreter.
    #[serde(default = "default_runtime_command")]
    pub command: String,
    /// Minimum major version.
    #[serde(default = "default_min_major")]
    pub min_major: u32,
    /// Minimum minor version. Patch level is unconstrained.
    #[serde(default = "default_min_minor")]
    pub min_minor: u32,
}

impl Default for RuntimeSpec {
    fn default() -> Self {
        Self {
            command: default_runtime_command(),
            min_major: default_min_major(),
            min_minor: default_min_minor(),
        }
    }
}

impl RuntimeSpec {
    /// Whether a reported version triple meets the floor.
    pub fn meets_floor(&self, major: u32, minor: u32) -> bool {
        major > self.min_major || (major == self.min_major && minor >= self.min_minor)
    }
}

/// One library the workshop imports, with a human label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSpec {
    /// Importable module name (e.g. `azure.ai.inference`).
    pub module: String,
    /// Human-readable label shown in the report.
    pub label: String,
}

/// A named group of optional configuration keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarGroup {
    /// Group label (e.g. "Lab 2").
    pub name: String,
    /// Keys in report order.
    pub keys: Vec<String>,
}

/// Static data the checks consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub runtime: RuntimeSpec,
    #[serde(default = "default_packages")]
    pub packages: Vec<PackageSpec>,
    #[serde(default = "default_required_vars")]
    pub required_vars: Vec<String>,
    #[serde(default = "default_optional_groups")]
    pub optional_groups: Vec<VarGroup>,
    #[serde(default = "default_sample_files")]
    pub sample_files: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            runtime: RuntimeSpec::default(),
            packages: default_packages(),
            required_vars: default_required_vars(),
            optional_groups: default_optional_groups(),
            sample_files: default_sample_files(),
        }
    }
}

impl Catalog {
    /// Load a catalog from a YAML file.
    ///
    /// Omitted sections fall back to the built-in workshop defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(LabreadyError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| LabreadyError::CatalogParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Resolve the catalog for a project.
    ///
    /// An explicit path must exist. Otherwise `labready.yml` in the project
    /// root is used when present, and the built-in defaults when not.
    pub fn resolve(project_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let conventional = project_root.join(CATALOG_FILE_NAME);
        if conventional.is_file() {
            tracing::debug!("using catalog {}", conventional.display());
            return Self::from_file(&conventional);
        }

        Ok(Self::default())
    }
}

fn default_runtime_command() -> String {
    "python3".to_string()
}

fn default_min_major() -> u32 {
    3
}

fn default_min_minor() -> u32 {
    8
}

fn default_packages() -> Vec<PackageSpec> {
    [
        ("openai", "Azure OpenAI SDK"),
        ("azure.ai.inference", "Azure AI Inference"),
        ("azure.cognitiveservices.speech", "Speech Services"),
        ("azure.ai.textanalytics", "Text Analytics"),
        ("azure.ai.vision.imageanalysis", "Vision Analysis"),
        ("azure.ai.formrecognizer", "Form Recognizer"),
        ("azure.ai.contentsafety", "Content Safety"),
        ("azure.search.documents", "Azure Search"),
        ("semantic_kernel", "Semantic Kernel"),
        ("autogen_agentchat", "AutoGen"),
        ("numpy", "NumPy"),
        ("pandas", "Pandas"),
        ("dotenv", "Python Dotenv"),
    ]
    .into_iter()
    .map(|(module, label)| PackageSpec {
        module: module.to_string(),
        label: label.to_string(),
    })
    .collect()
}

fn default_required_vars() -> Vec<String> {
    [
        "AZURE_OPENAI_ENDPOINT",
        "AZURE_OPENAI_API_KEY",
        "AZURE_OPENAI_DEPLOYMENT",
        "API_VERSION",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_optional_groups() -> Vec<VarGroup> {
    vec![
        VarGroup {
            name: "Lab 2".to_string(),
            keys: [
                "AZURE_LANGUAGE_ENDPOINT",
                "AZURE_LANGUAGE_KEY",
                "AZURE_VISION_ENDPOINT",
                "AZURE_VISION_KEY",
                "SPEECH_KEY",
                "SPEECH_REGION",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        },
        VarGroup {
            name: "Lab 5".to_string(),
            keys: ["AZURE_SEARCH_ENDPOINT", "AZURE_SEARCH_KEY"]
                .into_iter()
                .map(String::from)
                .collect(),
        },
    ]
}

fn default_sample_files() -> Vec<String> {
    [
        "samples/234039841.jpg",
        "samples/audio001.wav",
        "samples/car-accident.png",
        "samples/placa.jpg",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
