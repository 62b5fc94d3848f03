use std::{
    cell::OnceCell,
    collections::HashSet,
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Result, bail};
use colored::Colorize;
use rayon::prelude::*;
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        data::Catalog,
        error::TsError,
        file_scanner::scan_files,
        parsers::ts::{looks_like_xml, parse_ts_str},
        translator::Translator,
    },
    issues::ParseErrorIssue,
};

/// Shared state for checking a project's catalogs.
///
/// `CheckContext` resolves configuration, finds catalog files and parses
/// them on first access. Rules, commands and MCP tools all read from it.
///
/// # Configuration Priority
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--catalogs-root translations`)
/// 2. `.tsglotrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Directory the catalogs were searched in.
    pub catalogs_dir: PathBuf,

    /// Candidate catalog files, sorted by path.
    pub files: Vec<String>,

    /// Contexts skipped by message rules (from config `ignoreContexts`).
    pub ignore_contexts: HashSet<String>,

    /// Texts allowed to equal their source (from config `ignoreTexts`).
    pub ignore_texts: HashSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Parsed catalogs, sorted by path.
    /// Initialized on first call to `catalogs()`.
    catalogs: OnceCell<Vec<Catalog>>,

    /// Catalog files that failed to parse.
    /// Populated alongside `catalogs` initialization.
    parse_errors: OnceCell<Vec<ParseErrorIssue>>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the catalogs
    /// directory does not exist.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args.path.clone();
        let config_result = load_config(&root_dir)?;

        // In verbose mode, inform user if using default config
        if common_args.verbose && !config_result.from_file {
            eprintln!("Note: No .tsglotrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(ref catalogs_root) = common_args.catalogs_root {
            config.catalogs_root = catalogs_root.to_string_lossy().to_string();
        }

        Self::from_config(root_dir, config, common_args.verbose)
    }

    /// Create a context from an already resolved configuration.
    pub fn from_config(root_dir: PathBuf, config: Config, verbose: bool) -> Result<Self> {
        let catalogs_dir = resolve_dir(&root_dir, &config.catalogs_root);
        if !catalogs_dir.is_dir() {
            bail!(
                "Catalogs directory not found: {}\n  {} set \"catalogsRoot\" in {} or pass --catalogs-root",
                catalogs_dir.display(),
                "hint:".bold().cyan(),
                crate::config::CONFIG_FILE_NAME
            );
        }

        let scan_result = scan_files(&catalogs_dir, &config.includes, &config.ignores, verbose);

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }
        debug!(
            dir = %catalogs_dir.display(),
            files = scan_result.files.len(),
            "scanned for catalogs"
        );

        Ok(Self {
            ignore_contexts: config.ignore_contexts.iter().cloned().collect(),
            ignore_texts: config.ignore_texts.iter().cloned().collect(),
            config,
            root_dir,
            catalogs_dir,
            files: scan_result.files,
            verbose,
            catalogs: OnceCell::new(),
            parse_errors: OnceCell::new(),
        })
    }

    /// Get all parsed catalogs (lazy initialization).
    ///
    /// Files are read and parsed in parallel. Files that are not XML at
    /// all (TypeScript sources sharing the `.ts` extension) are skipped;
    /// every other failure is kept as a parse error.
    pub fn catalogs(&self) -> &Vec<Catalog> {
        self.catalogs.get_or_init(|| {
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| (file_path.clone(), load_catalog(file_path)))
                .collect();

            let mut catalogs = Vec::new();
            let mut errors = Vec::new();

            for (file_path, result) in results {
                match result {
                    Ok(Some(catalog)) => catalogs.push(catalog),
                    Ok(None) => debug!(file = %file_path, "skipped non-XML file"),
                    Err(e) => {
                        if self.verbose {
                            eprintln!("{} {} - {}", "warning:".bold().yellow(), file_path, e);
                        }
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: e.to_string(),
                        });
                    }
                }
            }

            // par_iter + collect keeps the (sorted) input order
            let _ = self.parse_errors.set(errors);
            catalogs
        })
    }

    /// Get catalog files that could not be parsed.
    ///
    /// Populated when `catalogs()` is first called.
    pub fn parse_errors(&self) -> &Vec<ParseErrorIssue> {
        self.catalogs();
        self.parse_errors.get_or_init(Vec::new)
    }

    /// Total number of messages across all parsed catalogs.
    pub fn message_count(&self) -> usize {
        self.catalogs().iter().map(Catalog::message_count).sum()
    }

    pub fn is_ignored_context(&self, name: &str) -> bool {
        self.ignore_contexts.contains(name)
    }

    /// A translator with every catalog loaded, optionally only those whose
    /// primary language subtag matches `language`.
    pub fn translator(&self, language: Option<&str>) -> Translator {
        let wanted = language.map(crate::core::data::primary_subtag);
        let mut translator = Translator::new();
        for catalog in self.catalogs() {
            if wanted
                .as_ref()
                .is_none_or(|code| *code == catalog.language_code())
            {
                translator.load(catalog.clone());
            }
        }
        translator
    }
}

fn load_catalog(file_path: &str) -> Result<Option<Catalog>, TsError> {
    let content = fs::read_to_string(file_path).map_err(|source| TsError::Io {
        path: file_path.to_string(),
        source,
    })?;
    if !looks_like_xml(&content) {
        return Ok(None);
    }
    parse_ts_str(&content, file_path).map(Some)
}

/// Join a configured directory onto the project root.
///
/// Keeps paths short when the root is `.` so reported locations stay
/// relative (`./translations/katvan_he.ts`).
fn resolve_dir(root_dir: &Path, dir: &str) -> PathBuf {
    let p = Path::new(dir);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
