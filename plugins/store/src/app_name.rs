//! Application identity used to locate the on-disk preference directory

use std::path::PathBuf;

/// Application identifier used to determine where namespace files live
///
/// Resolution follows the platform conventions of the `directories` crate:
/// - Linux: `$XDG_CONFIG_HOME/<app>/store` or `~/.config/<app>/store`
/// - macOS: `~/Library/Application Support/<qualifier>.<org>.<app>/store`
/// - Windows: `%LOCALAPPDATA%\<org>\<app>\config\store`
///
/// # Example
///
/// ```
/// use coinwidget_store::AppName;
///
/// let app_name = AppName::new("com", "brentpanther", "coinwidget");
/// assert_eq!(app_name.application, "coinwidget");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppName {
    pub qualifier: String,
    pub organization: String,
    pub application: String,
}

impl AppName {
    /// Create a new application name
    ///
    /// # Arguments
    ///
    /// * `qualifier` - Typically a reverse domain name (e.g., "com", "org")
    /// * `organization` - Your organization or username
    /// * `application` - The application name
    pub fn new(
        qualifier: impl Into<String>,
        organization: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        Self {
            qualifier: qualifier.into(),
            organization: organization.into(),
            application: application.into(),
        }
    }

    /// Directory holding one JSON file per namespace
    ///
    /// Falls back to `./store` when no home directory can be determined.
    pub fn storage_dir(&self) -> PathBuf {
        directories::ProjectDirs::from(
            self.qualifier.as_str(),
            self.organization.as_str(),
            self.application.as_str(),
        )
        .map(|dirs| dirs.config_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("store")
    }
}
