// SPDX-License-Identifier: CC0-1.0

//! Target platforms and spec compiler families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Platform a client is generated for. Only used to pick the compiler binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientPlatform {
    /// Microsoft Windows
    #[serde(rename = "windows")]
    Windows,
    /// Linux
    #[serde(rename = "linux")]
    Linux,
    /// macOS
    #[serde(rename = "macos")]
    MacOs,
}

impl ClientPlatform {
    /// Platform the current process is running on.
    pub fn host() -> Self {
        if cfg!(windows) {
            ClientPlatform::Windows
        } else if cfg!(target_os = "macos") {
            ClientPlatform::MacOs
        } else {
            ClientPlatform::Linux
        }
    }

    /// Directory key used under the tools root.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientPlatform::Windows => "windows",
            ClientPlatform::Linux => "linux",
            ClientPlatform::MacOs => "macos",
        }
    }

    /// Suffix appended to executable names on this platform.
    pub fn executable_suffix(&self) -> &'static str {
        match self {
            ClientPlatform::Windows => ".exe",
            ClientPlatform::Linux | ClientPlatform::MacOs => "",
        }
    }
}

impl FromStr for ClientPlatform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win" | "win32" | "win64" => Ok(ClientPlatform::Windows),
            "linux" => Ok(ClientPlatform::Linux),
            "macos" | "darwin" | "osx" => Ok(ClientPlatform::MacOs),
            _ => Err(format!("Unknown client platform: {}", s)),
        }
    }
}

impl fmt::Display for ClientPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Family of external spec compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CompilerKind {
    /// Apache Thrift
    #[default]
    #[serde(rename = "thrift")]
    Thrift,
}

impl CompilerKind {
    /// Directory name under the tools root.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompilerKind::Thrift => "thrift",
        }
    }

    /// Binary name without any platform suffix.
    pub fn binary_stem(&self) -> &'static str {
        match self {
            CompilerKind::Thrift => "thrift",
        }
    }

    /// Full binary name for `platform`, e.g. `thrift.exe`.
    pub fn binary_name(&self, platform: ClientPlatform) -> String {
        format!("{}{}", self.binary_stem(), platform.executable_suffix())
    }
}

impl fmt::Display for CompilerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}
