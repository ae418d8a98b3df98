use starterkit_core::backend::DesktopBackend;
use starterkit_core::catalog::{ApiDocs, ComponentCatalog};
use starterkit_core::config::AppConfig;
use starterkit_core::format::Locale;
use starterkit_core::palette::PaletteSwitch;
use starterkit_core::{Theme, ThemeStore};

use crate::cli::{Command, ComponentsAction, DocsAction, ThemeAction};
use crate::clipboard;
use crate::error::CliError;
use crate::screen;
use crate::toast::Toast;

pub struct App {
    config: AppConfig,
    locale: Locale,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, CliError> {
        let locale = config.general.locale()?;
        Ok(Self { config, locale })
    }

    /// Run one command, returning what should be printed on stdout.
    pub fn run(&self, command: Command) -> Result<String, CliError> {
        match command {
            Command::Theme { action } => {
                let mut store = self.theme_store();
                store.initialize();
                Ok(match action.unwrap_or(ThemeAction::Show) {
                    ThemeAction::Show => screen::theme::show(&store),
                    ThemeAction::Toggle => screen::theme::toggle(&mut store),
                    ThemeAction::Set { theme } => screen::theme::set(&mut store, theme),
                })
            }
            Command::Docs { action } => {
                let docs = ApiDocs::builtin();
                match action.unwrap_or(DocsAction::List { tag: None }) {
                    DocsAction::List { tag } => Ok(screen::docs::list(&docs, tag.as_deref())),
                    DocsAction::Tags => Ok(screen::docs::tags(&docs)),
                    DocsAction::Show { id } => screen::docs::show(&docs, &id, self.active_theme()),
                }
            }
            Command::Components { action } => {
                let catalog = ComponentCatalog::builtin();
                match action.unwrap_or(ComponentsAction::List { category: None }) {
                    ComponentsAction::List { category } => Ok(screen::components::list(
                        &catalog,
                        category.as_deref(),
                        self.locale,
                    )),
                    ComponentsAction::Categories => Ok(screen::components::categories(&catalog)),
                    ComponentsAction::Show { id } => {
                        screen::components::show(&catalog, &id, self.locale)
                    }
                    ComponentsAction::Table => Ok(screen::components::table(
                        ApiDocs::builtin().table_rows(),
                        self.locale,
                    )),
                }
            }
            Command::Copy { id, request } => self.copy_example(&id, request),
        }
    }

    fn copy_example(&self, id: &str, request: bool) -> Result<String, CliError> {
        let docs = ApiDocs::builtin();
        let endpoint = docs.endpoint(id)?;
        let (kind, text) = if request {
            let text = endpoint
                .request_text()
                .ok_or_else(|| CliError::NoRequestExample(id.to_string()))?;
            ("request", text)
        } else {
            ("response", endpoint.response_text())
        };
        clipboard::copy_text(&text)?;
        Ok(format!(
            "{}\n",
            Toast::success(format!("Copied {kind} example of {id}"))
        ))
    }

    fn theme_store(&self) -> ThemeStore<DesktopBackend, PaletteSwitch> {
        ThemeStore::new(
            DesktopBackend::from_config(&self.config),
            PaletteSwitch::builtin(),
        )
    }

    /// Resolve the saved theme without changing it.
    fn active_theme(&self) -> Theme {
        self.theme_store().initialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starterkit_core::StarterKitError;

    fn app(dir: &std::path::Path) -> App {
        let mut config = AppConfig::default();
        config.storage.data_dir = Some(dir.to_path_buf());
        config.appearance.follow_system = false;
        App::new(config).unwrap()
    }

    #[test]
    fn test_theme_set_then_show_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let out = app(dir.path())
            .run(Command::Theme {
                action: Some(ThemeAction::Set { theme: Theme::Dark }),
            })
            .unwrap();
        assert_eq!(out, "✓ Switched to dark mode\n");

        let out = app(dir.path()).run(Command::Theme { action: None }).unwrap();
        assert!(out.starts_with("Theme:   dark (saved preference)\n"));
    }

    #[test]
    fn test_theme_toggle_from_default() {
        let dir = tempfile::tempdir().unwrap();
        let out = app(dir.path())
            .run(Command::Theme {
                action: Some(ThemeAction::Toggle),
            })
            .unwrap();
        assert_eq!(out, "✓ Switched to dark mode\n");
    }

    #[test]
    fn test_docs_show_uses_saved_theme() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("theme"), "dark").unwrap();
        let out = app(dir.path())
            .run(Command::Docs {
                action: Some(DocsAction::Show {
                    id: "get-users".into(),
                }),
            })
            .unwrap();
        assert!(out.contains("badge #60a5fa on #172554"));
    }

    #[test]
    fn test_components_default_is_list() {
        let dir = tempfile::tempdir().unwrap();
        let out = app(dir.path())
            .run(Command::Components { action: None })
            .unwrap();
        assert!(out.contains("radio-group"));
        assert!(out.contains("안정"));
    }

    #[test]
    fn test_copy_without_request_example() {
        let dir = tempfile::tempdir().unwrap();
        let err = app(dir.path())
            .run(Command::Copy {
                id: "get-users".into(),
                request: true,
            })
            .unwrap_err();
        assert!(matches!(err, CliError::NoRequestExample(id) if id == "get-users"));
    }

    #[test]
    fn test_copy_unknown_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let err = app(dir.path())
            .run(Command::Copy {
                id: "nope".into(),
                request: false,
            })
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(StarterKitError::UnknownEndpoint(_))
        ));
    }

    #[test]
    fn test_bad_locale_rejected() {
        let mut config = AppConfig::default();
        config.general.locale = "xx".into();
        assert!(App::new(config).is_err());
    }
}
