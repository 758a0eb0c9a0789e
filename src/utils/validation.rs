//! Input validation primitives.
//!
//! npm package-name rules, shared by the `new` prompts and the scaffold.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

const MAX_PACKAGE_NAME_LENGTH: usize = 214;

const RESERVED_PACKAGE_NAMES: &[&str] = &["node_modules", "favicon.ico"];

const NODE_BUILTIN_MODULES: &[&str] = &[
    "assert", "async_hooks", "buffer", "child_process", "cluster", "console", "constants",
    "crypto", "dgram", "diagnostics_channel", "dns", "domain", "events", "fs", "http", "http2",
    "https", "inspector", "module", "net", "os", "path", "perf_hooks", "process", "punycode",
    "querystring", "readline", "repl", "stream", "string_decoder", "sys", "timers", "tls",
    "trace_events", "tty", "url", "util", "v8", "vm", "wasi", "worker_threads", "zlib",
];

// Optional `@scope/` prefix, then URL-safe characters only
static PACKAGE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:@([a-z0-9\-._~]+)/)?([a-z0-9\-._]+)$").unwrap());

/// Describe why `name` cannot be published as a new npm package, if it can't.
pub fn package_name_problem(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if name.len() > MAX_PACKAGE_NAME_LENGTH {
        return Some("name cannot be longer than 214 characters");
    }
    if name.trim() != name {
        return Some("name cannot contain leading or trailing spaces");
    }
    if name.starts_with('.') {
        return Some("name cannot start with a period");
    }
    if name.starts_with('_') {
        return Some("name cannot start with an underscore");
    }
    if name.to_lowercase() != name {
        return Some("name can only contain lowercase characters");
    }
    if RESERVED_PACKAGE_NAMES.contains(&name) {
        return Some("name is reserved");
    }
    if NODE_BUILTIN_MODULES.contains(&name) {
        return Some("name is a Node core module name");
    }
    match PACKAGE_NAME_PATTERN.captures(name) {
        Some(caps) => {
            let bare = &caps[2];
            if bare.starts_with('.') || bare.starts_with('_') {
                return Some("name cannot start with a period or underscore");
            }
            None
        }
        None => Some("name can only contain URL-friendly characters"),
    }
}

/// Require `name` to be valid for a new npm package.
pub fn require_package_name(name: &str) -> Result<&str> {
    match package_name_problem(name) {
        None => Ok(name),
        Some(problem) => Err(Error::validation_invalid_argument(
            "projectName",
            format!("Invalid package name: {}", problem),
            Some(name.to_string()),
            None,
        )),
    }
}
