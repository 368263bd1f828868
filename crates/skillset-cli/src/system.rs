//! Host information reported to skills
//!
//! Names follow the Node.js conventions (`os.type()`, `process.arch`) because
//! the skill instructions are written against those values.

use anyhow::{anyhow, Result};
use std::path::Path;

/// Operating system type, e.g. `Linux`, `Darwin`, `Windows_NT`
pub fn os_type() -> &'static str {
    node_os_type(std::env::consts::OS)
}

/// CPU architecture, e.g. `x64`, `arm64`
pub fn arch() -> &'static str {
    node_arch(std::env::consts::ARCH)
}

/// Name of the user running the process
pub fn username() -> Result<String> {
    username_from(|key| std::env::var(key).ok(), dirs::home_dir().as_deref())
}

fn node_os_type(os: &'static str) -> &'static str {
    match os {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows_NT",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        other => other,
    }
}

fn node_arch(arch: &'static str) -> &'static str {
    match arch {
        "x86_64" => "x64",
        "x86" => "ia32",
        "aarch64" => "arm64",
        "powerpc64" => "ppc64",
        other => other,
    }
}

fn username_from(lookup: impl Fn(&str) -> Option<String>, home: Option<&Path>) -> Result<String> {
    ["USER", "USERNAME", "LOGNAME"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .or_else(|| {
            home.and_then(Path::file_name)
                .map(|name| name.to_string_lossy().into_owned())
        })
        .ok_or_else(|| anyhow!("Could not determine the current username"))
}
