use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where a report came from: code revision, inputs, parameters.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub cellgraph_version: &'static str,
    pub tag: Option<String>,
    pub params: Value,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(params: Value, tag: Option<String>) -> Self {
        Self {
            code_rev: current_git_rev(),
            cellgraph_version: cellgraph::VERSION,
            tag,
            params,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn input(mut self, path: &Path) -> Self {
        self.inputs.push(path.to_string_lossy().into_owned());
        self
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`, listing it as the output.
pub fn write_sidecar(artifact: &Path, mut prov: Provenance) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    prov.outputs.push(artifact.to_string_lossy().into_owned());
    fs::write(&path, serde_json::to_vec_pretty(&prov)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "report".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then runtime), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
