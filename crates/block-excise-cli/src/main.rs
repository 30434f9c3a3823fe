use anyhow::{Context, Result, bail};
use block_excise_config::{Config, MarkerConfig};
use block_excise_engine::{
    DEFAULT_CLOSING_MARKER, DEFAULT_MIDDLE_MARKER, DEFAULT_START_MARKER, ExciseError, Markers,
    MatchPolicy, io,
};
use std::{env, path::PathBuf};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let root = project_root(&args)?;

    io::validate_root(&root)?;

    let config = match Config::load_for_root(&root).context("Failed to load config file")? {
        Some((config, config_path)) => {
            log::info!("Using config from {}", config_path.display());
            config
        }
        None => {
            log::debug!("No config file found, using built-in target and markers");
            Config::default()
        }
    };

    let markers = markers_from_config(&config.markers)?;
    let policy = MatchPolicy::from_strict(config.strict);
    let target_path = config.target.to_path(&root);

    let excision = io::excise_file(&config.target, &root, &markers, policy)
        .with_context(|| format!("Failed to remove block from {}", target_path.display()))?;

    log::info!(
        "Removed bytes {}..{} ({} bytes) from {}",
        excision.span.start,
        excision.span.end,
        excision.span.len(),
        target_path.display()
    );

    Ok(())
}

/// Project root from the command line, or the working directory if none given
fn project_root(args: &[String]) -> Result<PathBuf> {
    match args {
        [_] => env::current_dir().context("Failed to read current directory"),
        [_, root] => {
            let root = PathBuf::from(root);
            Ok(Config::expand_path(&root).unwrap_or(root))
        }
        _ => {
            let program = args.first().map_or("block-excise", String::as_str);
            bail!("Usage: {program} [project-root]")
        }
    }
}

fn markers_from_config(overrides: &MarkerConfig) -> Result<Markers, ExciseError> {
    Markers::new(
        overrides.start.as_deref().unwrap_or(DEFAULT_START_MARKER),
        overrides.middle.as_deref().unwrap_or(DEFAULT_MIDDLE_MARKER),
        overrides.closing.as_deref().unwrap_or(DEFAULT_CLOSING_MARKER),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use block_excise_engine::MarkerKind;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_root_defaults_to_current_dir() {
        let root = project_root(&args(&["block-excise"])).unwrap();
        assert_eq!(root, env::current_dir().unwrap());
    }

    #[test]
    fn test_root_from_argument() {
        let root = project_root(&args(&["block-excise", "/tmp/web"])).unwrap();
        assert_eq!(root, PathBuf::from("/tmp/web"));
    }

    #[test]
    fn test_too_many_arguments_is_usage_error() {
        let err = project_root(&args(&["block-excise", "a", "b"])).unwrap_err();
        assert!(err.to_string().starts_with("Usage: block-excise"));
    }

    #[test]
    fn test_markers_default_without_overrides() {
        let markers = markers_from_config(&MarkerConfig::default()).unwrap();
        assert_eq!(markers, Markers::default());
    }

    #[test]
    fn test_markers_partial_override() {
        let overrides = MarkerConfig {
            closing: Some("</a>".to_string()),
            ..MarkerConfig::default()
        };

        let markers = markers_from_config(&overrides).unwrap();

        assert_eq!(markers.start(), DEFAULT_START_MARKER);
        assert_eq!(markers.closing(), "</a>");
    }

    #[test]
    fn test_empty_marker_override_rejected() {
        let overrides = MarkerConfig {
            middle: Some(String::new()),
            ..MarkerConfig::default()
        };

        let err = markers_from_config(&overrides).unwrap_err();

        assert_eq!(err, ExciseError::EmptyMarker(MarkerKind::Middle));
    }

    #[test]
    fn test_end_to_end_with_project_config() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            Config::project_config_path(root.path()),
            "target = \"page.tsx\"\n\n[markers]\nstart = \"<aside\"\nmiddle = \"<a \"\nclosing = \"</a>\"\n",
        )
        .unwrap();
        let page = root.path().join("page.tsx");
        std::fs::write(&page, "<main>\n<aside>\n<a href=\"/x\">x</a>\n</main>\n").unwrap();

        let (config, _) = Config::load_for_root(root.path()).unwrap().unwrap();
        let markers = markers_from_config(&config.markers).unwrap();
        io::excise_file(
            &config.target,
            root.path(),
            &markers,
            MatchPolicy::from_strict(config.strict),
        )
        .unwrap();

        assert_eq!(std::fs::read_to_string(page).unwrap(), "<main>\n</main>\n");
    }
}
