use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::app::Tab;

pub const DEFAULT_COMMUNITY: &str = "Oakridge Estates";
pub const DEFAULT_RESIDENT: &str = "Alex";
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub chat: bool,
    pub perf: bool,
    pub tab: Option<Tab>,
    pub reply_delay_ms: Option<u64>,
    pub community: Option<String>,
    pub resident: Option<String>,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            chat: self.chat || other.chat,
            perf: self.perf || other.perf,
            tab: other.tab.or(self.tab),
            reply_delay_ms: other.reply_delay_ms.or(self.reply_delay_ms),
            community: other.community.clone().or_else(|| self.community.clone()),
            resident: other.resident.clone().or_else(|| self.resident.clone()),
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("covenant-hub").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("covenant-hub")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("covenant-hub").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("covenant-hub")
                .join("config");
        }
    }

    PathBuf::from(".covenantrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".covenantrc")
}

/// Load flags from a config file.
///
/// Each non-comment line holds one flag; everything after the first
/// whitespace is its value, so names with spaces need no quoting.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| match line.split_once(char::is_whitespace) {
            Some((flag, value)) => vec![flag.to_string(), value.trim().to_string()],
            None => vec![line.to_string()],
        })
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# covenant-hub defaults (saved with --save)".to_string());
    if flags.chat {
        lines.push("--chat".to_string());
    }
    if let Some(tab) = flags.tab {
        lines.push(format!("--tab {}", tab.as_str()));
    }
    if let Some(ms) = flags.reply_delay_ms {
        lines.push(format!("--reply-delay-ms {ms}"));
    }
    if let Some(community) = &flags.community {
        lines.push(format!("--community {community}"));
    }
    if let Some(resident) = &flags.resident {
        lines.push(format!("--resident {resident}"));
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        if token == "--chat" {
            flags.chat = true;
        } else if token == "--perf" {
            flags.perf = true;
        } else if let Some((name, value)) = token.split_once('=') {
            apply_valued_flag(&mut flags, name, value);
        } else if is_valued_flag(token) {
            if let Some(next) = tokens.get(i + 1) {
                apply_valued_flag(&mut flags, token, next);
                i += 1;
            }
        }
        i += 1;
    }
    flags
}

fn is_valued_flag(name: &str) -> bool {
    matches!(
        name,
        "--tab" | "--reply-delay-ms" | "--community" | "--resident" | "--debug-log"
    )
}

fn apply_valued_flag(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--tab" => flags.tab = Tab::parse(value),
        "--reply-delay-ms" => flags.reply_delay_ms = value.parse().ok(),
        "--community" => flags.community = non_empty(value),
        "--resident" => flags.resident = non_empty(value),
        "--debug-log" => flags.debug_log = non_empty(value).map(PathBuf::from),
        _ => {}
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
