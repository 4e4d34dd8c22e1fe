// SPDX-License-Identifier: CC0-1.0

//! Target languages for generated client bindings.
//!
//! `ClientLanguage` is a closed set. Adding a language means adding a variant
//! here, an entry in [`crate::catalog`], and (when it links differently from the
//! existing ones) a linkage convention in the pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Client language a spec compiler can be asked to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClientLanguage {
    /// C++ client
    #[serde(rename = "cpp")]
    CPlusPlus,
    /// C# client
    #[serde(rename = "csharp")]
    CSharp,
    /// Java client
    #[serde(rename = "java")]
    Java,
    /// JavaScript client
    #[serde(rename = "js")]
    Javascript,
    /// Python client
    #[serde(rename = "py")]
    Python,
    /// Go client. Recognised on input, but has no compiler mapping registered.
    #[serde(rename = "go")]
    Go,
}

impl ClientLanguage {
    /// Every language variant, in declaration order.
    pub const ALL: [ClientLanguage; 6] = [
        ClientLanguage::CPlusPlus,
        ClientLanguage::CSharp,
        ClientLanguage::Java,
        ClientLanguage::Javascript,
        ClientLanguage::Python,
        ClientLanguage::Go,
    ];

    /// Short identifier used on the command line and in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientLanguage::CPlusPlus => "cpp",
            ClientLanguage::CSharp => "csharp",
            ClientLanguage::Java => "java",
            ClientLanguage::Javascript => "js",
            ClientLanguage::Python => "py",
            ClientLanguage::Go => "go",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ClientLanguage::CPlusPlus => "C++",
            ClientLanguage::CSharp => "C#",
            ClientLanguage::Java => "Java",
            ClientLanguage::Javascript => "JavaScript",
            ClientLanguage::Python => "Python",
            ClientLanguage::Go => "Go",
        }
    }
}

impl FromStr for ClientLanguage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpp" | "c++" | "cplusplus" => Ok(ClientLanguage::CPlusPlus),
            "csharp" | "cs" | "c#" => Ok(ClientLanguage::CSharp),
            "java" => Ok(ClientLanguage::Java),
            "js" | "javascript" => Ok(ClientLanguage::Javascript),
            "py" | "python" => Ok(ClientLanguage::Python),
            "go" | "golang" => Ok(ClientLanguage::Go),
            _ => Err(format!("Unknown client language: {}", s)),
        }
    }
}

impl fmt::Display for ClientLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}
