//! In-memory output container a compile run writes into.
//!
//! A [`ConfigOutput`] accumulates [`ConfigFile`]s keyed by path; files are
//! append-only and preserve caller order. Also owns the bundle-specific
//! object emission for both dialects.

use std::collections::{BTreeMap, HashSet};

use setforge_core::emit::Dialect;
use setforge_core::types::OBJECT_TYPE_APPLY;
use setforge_db::models::Service;

/// Accumulated configuration files of one compile run.
#[derive(Debug)]
pub struct ConfigOutput {
    dialect: Dialect,
    files: BTreeMap<String, ConfigFile>,
}

impl ConfigOutput {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            files: BTreeMap::new(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Open or create the file at `path`, with an optional extension
    /// appended to the stored key.
    pub fn config_file(&mut self, path: &str, extension: Option<&str>) -> &mut ConfigFile {
        let key = match extension {
            Some(ext) => format!("{path}{ext}"),
            None => path.to_string(),
        };
        self.files.entry(key).or_default()
    }

    pub fn file(&self, path: &str) -> Option<&ConfigFile> {
        self.files.get(path)
    }

    pub fn files(&self) -> &BTreeMap<String, ConfigFile> {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// One appendable text file inside a [`ConfigOutput`].
#[derive(Debug, Default)]
pub struct ConfigFile {
    content: String,
    /// Chunks already written via [`Self::add_content`]; headers only, so
    /// nothing else is ever merged away.
    seen_chunks: HashSet<String>,
}

impl ConfigFile {
    /// Append free-form content. An exact repeat of a chunk written
    /// through this method is suppressed, so a set's header comment lands
    /// once per file even when several sets share the file. Objects are
    /// never deduplicated.
    pub fn add_content(&mut self, chunk: &str) {
        if self.seen_chunks.insert(chunk.to_string()) {
            self.content.push_str(chunk);
        }
    }

    /// Append one object in the modern dialect.
    pub fn add_object(&mut self, service: &Service, host_name: Option<&str>) {
        self.content.push_str(&render_object(service, host_name));
    }

    /// Append one statically bound object in the legacy dialect.
    pub fn add_legacy_object(&mut self, service: &Service, host_names: &[String]) {
        self.content
            .push_str(&render_legacy_object(service, host_names));
    }

    /// Insert content at the start of the file.
    pub fn prepend(&mut self, chunk: &str) {
        self.content.insert_str(0, chunk);
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Render one service in the modern dialect.
fn render_object(service: &Service, host_name: Option<&str>) -> String {
    let keyword = if service.object_type == OBJECT_TYPE_APPLY {
        "apply"
    } else {
        "object"
    };

    let mut out = format!("{keyword} Service \"{}\" {{\n", service.object_name);
    out.push_str(&format!("    import \"{}\"\n", service.object_name));
    if let Some(host) = host_name {
        out.push_str(&format!("    host_name = \"{host}\"\n"));
    }
    for (key, value) in service.vars() {
        out.push_str(&format!("    vars.{key} = {value}\n"));
    }
    if let Some(filter) = &service.assign_filter {
        out.push_str(&format!("    assign where {filter}\n"));
    }
    out.push_str("}\n\n");
    out
}

/// Render one service in the legacy dialect, bound to the comma-joined
/// host list of its zone.
fn render_legacy_object(service: &Service, host_names: &[String]) -> String {
    let mut out = String::from("define service {\n");
    out.push_str(&format!("    {:<24}{}\n", "use", service.object_name));
    out.push_str(&format!(
        "    {:<24}{}\n",
        "service_description", service.object_name
    ));
    out.push_str(&format!("    {:<24}{}\n", "host_name", host_names.join(",")));
    for (key, value) in service.vars() {
        let value = match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        out.push_str(&format!("    {:<24}{}\n", format!("_{key}"), value));
    }
    out.push_str("}\n\n");
    out
}
