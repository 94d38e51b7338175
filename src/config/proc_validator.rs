//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - Checks server/metrics paths, logging level, exchange timeout,
//!   token endpoint and spreadsheet target

use tracing::{error, info};

use crate::config::service::{CredentialSource, OAuthConfig, ServiceConfig, SheetsConfig};
use crate::config::settings::SettingsConfig;
use crate::utils::constants::LOG_LEVELS;

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);
    validate_credential(&cfg.credential, &mut errors);
    validate_oauth(&cfg.oauth, &mut errors);
    validate_sheets(&cfg.sheets, &mut errors);

    if errors.is_empty() {
        info!("config is valid");
        Ok(())
    } else {
        for e in &errors {
            error!("config: {}", e);
        }
        Err(errors)
    }
}

fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    if settings.server.host.trim().is_empty() {
        errors.push("settings.server.host must not be empty".to_string());
    }
    if settings.server.port.parse::<u16>().is_err() {
        errors.push(format!(
            "settings.server.port '{}' is not a valid port",
            settings.server.port
        ));
    }
    validate_route_path("settings.server.rsvp_path", &settings.server.rsvp_path, errors);

    if settings.metrics.is_enabled {
        validate_route_path("settings.metrics.path", &settings.metrics.path, errors);
        if settings.metrics.path == settings.server.rsvp_path {
            errors.push(format!(
                "settings.metrics.path '{}' collides with settings.server.rsvp_path",
                settings.metrics.path
            ));
        }
    }

    if let Some(logging) = &settings.logging {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' must be one of {:?}",
                logging.level, LOG_LEVELS
            ));
        }
    }

    if settings.token_exchange.timeout_ms == 0 {
        errors.push("settings.token_exchange.timeout_ms must be > 0".to_string());
    }
}

fn validate_route_path(field: &str, path: &str, errors: &mut Vec<String>) {
    if !path.starts_with('/') {
        errors.push(format!("{} '{}' must start with '/'", field, path));
    }
}

fn validate_credential(credential: &CredentialSource, errors: &mut Vec<String>) {
    match credential {
        CredentialSource::FromEnv { from_env } if from_env.trim().is_empty() => {
            errors.push("credential.from_env must name an environment variable".to_string());
        }
        CredentialSource::FromFile { path } if path.trim().is_empty() => {
            errors.push("credential.path must not be empty".to_string());
        }
        CredentialSource::Inline { client_email, private_key } => {
            if client_email.trim().is_empty() {
                errors.push("credential.client_email must not be empty".to_string());
            }
            if private_key.trim().is_empty() {
                errors.push("credential.private_key must not be empty".to_string());
            }
        }
        _ => {}
    }
}

fn validate_oauth(oauth: &OAuthConfig, errors: &mut Vec<String>) {
    if !is_http_url(&oauth.token_url) {
        errors.push(format!(
            "oauth.token_url '{}' must be an http(s) URL",
            oauth.token_url
        ));
    }
    if oauth.scope.trim().is_empty() {
        errors.push("oauth.scope must not be empty".to_string());
    }
    if let Some(audience) = &oauth.audience {
        if audience.trim().is_empty() {
            errors.push("oauth.audience must not be empty when set".to_string());
        }
    }
}

fn validate_sheets(sheets: &SheetsConfig, errors: &mut Vec<String>) {
    if !is_http_url(&sheets.base_url) {
        errors.push(format!(
            "sheets.base_url '{}' must be an http(s) URL",
            sheets.base_url
        ));
    }
    if sheets.spreadsheet_id.trim().is_empty() {
        errors.push("sheets.spreadsheet_id must not be empty".to_string());
    }
    if sheets.range.trim().is_empty() {
        errors.push("sheets.range must not be empty".to_string());
    }
    if !matches!(sheets.value_input_option.as_str(), "RAW" | "USER_ENTERED") {
        errors.push(format!(
            "sheets.value_input_option '{}' must be RAW or USER_ENTERED",
            sheets.value_input_option
        ));
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
