//! Sidebar context - read-only collaborators for the display list pipeline
//!
//! Holds the identity, preference, team and locale lookups plus the
//! presentation settings the enricher needs. Nothing here is global; callers
//! build a context per store snapshot and pass it explicitly.

use std::fmt;
use std::sync::Arc;

use sidebar_common::SidebarConfig;
use sidebar_core::{
    IdentityLookup, Locale, LocaleProvider, PreferenceLookup, TeamLookup, TeammateNameDisplay,
};

use super::error::{ServiceError, ServiceResult};

/// Collaborators and settings used to derive a display list
#[derive(Clone)]
pub struct SidebarContext {
    identity: Arc<dyn IdentityLookup>,
    preferences: Arc<dyn PreferenceLookup>,
    teams: Arc<dyn TeamLookup>,
    locale: Arc<dyn LocaleProvider>,
    name_display: TeammateNameDisplay,
    unknown_user_label: String,
}

impl SidebarContext {
    /// Start building a context
    pub fn builder() -> SidebarContextBuilder {
        SidebarContextBuilder::new()
    }

    /// Identity and presence lookup
    pub fn identity(&self) -> &dyn IdentityLookup {
        self.identity.as_ref()
    }

    /// Preference lookup
    pub fn preferences(&self) -> &dyn PreferenceLookup {
        self.preferences.as_ref()
    }

    /// Team membership lookup
    pub fn teams(&self) -> &dyn TeamLookup {
        self.teams.as_ref()
    }

    /// Locale read at call time
    pub fn current_locale(&self) -> Locale {
        self.locale.current_locale()
    }

    /// How teammate names are displayed
    pub fn name_display(&self) -> TeammateNameDisplay {
        self.name_display
    }

    /// Label for teammates without a loaded profile
    pub fn unknown_user_label(&self) -> &str {
        &self.unknown_user_label
    }
}

impl fmt::Debug for SidebarContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidebarContext")
            .field("lookups", &"...")
            .field("name_display", &self.name_display)
            .field("unknown_user_label", &self.unknown_user_label)
            .finish()
    }
}

/// Builder for creating SidebarContext
pub struct SidebarContextBuilder {
    identity: Option<Arc<dyn IdentityLookup>>,
    preferences: Option<Arc<dyn PreferenceLookup>>,
    teams: Option<Arc<dyn TeamLookup>>,
    locale: Option<Arc<dyn LocaleProvider>>,
    name_display: TeammateNameDisplay,
    unknown_user_label: String,
}

impl SidebarContextBuilder {
    pub fn new() -> Self {
        Self::from_config(&SidebarConfig::default())
    }

    /// Start from configured presentation settings
    ///
    /// The configured locale is used unless a locale provider is set explicitly.
    pub fn from_config(config: &SidebarConfig) -> Self {
        Self {
            identity: None,
            preferences: None,
            teams: None,
            locale: Some(Arc::new(config.locale.clone())),
            name_display: config.teammate_name_display,
            unknown_user_label: config.unknown_user_label.clone(),
        }
    }

    pub fn identity(mut self, identity: Arc<dyn IdentityLookup>) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn preferences(mut self, preferences: Arc<dyn PreferenceLookup>) -> Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn teams(mut self, teams: Arc<dyn TeamLookup>) -> Self {
        self.teams = Some(teams);
        self
    }

    pub fn locale(mut self, locale: Arc<dyn LocaleProvider>) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn name_display(mut self, name_display: TeammateNameDisplay) -> Self {
        self.name_display = name_display;
        self
    }

    pub fn unknown_user_label(mut self, label: impl Into<String>) -> Self {
        self.unknown_user_label = label.into();
        self
    }

    /// Build the SidebarContext
    ///
    /// # Errors
    /// Returns `ServiceError::MissingDependency` if a lookup is missing
    pub fn build(self) -> ServiceResult<SidebarContext> {
        Ok(SidebarContext {
            identity: self.identity.ok_or(ServiceError::MissingDependency("identity"))?,
            preferences: self
                .preferences
                .ok_or(ServiceError::MissingDependency("preferences"))?,
            teams: self.teams.ok_or(ServiceError::MissingDependency("teams"))?,
            locale: self.locale.ok_or(ServiceError::MissingDependency("locale"))?,
            name_display: self.name_display,
            unknown_user_label: self.unknown_user_label,
        })
    }
}

impl Default for SidebarContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
