use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub registration: RegistrationConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Settings for the registration endpoints
#[derive(Debug, Clone)]
pub struct RegistrationConfig {
    /// bcrypt work factor applied to every stored password
    pub bcrypt_cost: u32,
    /// Run the form field rules on the server as well (off by default, the
    /// server otherwise trusts the client-side checks)
    pub enforce_field_rules: bool,
    /// Collection name the documents are stored under
    pub collection: String,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Client-side settings used by the signup form to reach the registration
/// API and the postal code service
#[derive(Debug, Clone)]
pub struct SignupClientConfig {
    pub api_base_url: String,
    pub viacep_base_url: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Read every section from the process environment. `.env` is loaded
    /// by the binary before this runs.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            registration: RegistrationConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 4000;
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origins = parse_list(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Default values for database connection pool (conservative defaults for small-medium apps)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl RegistrationConfig {
    pub const DEFAULT_BCRYPT_COST: u32 = 10;
    const DEFAULT_COLLECTION: &'static str = "registrations";

    pub fn from_env() -> Result<Self, String> {
        let bcrypt_cost = parse_bcrypt_cost(env::var("BCRYPT_COST").ok())?;

        let enforce_field_rules = parse_bool(
            "REGISTRATION_ENFORCE_FIELD_RULES",
            env::var("REGISTRATION_ENFORCE_FIELD_RULES").ok(),
        )?;

        let collection = env::var("DOCUMENT_COLLECTION")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_COLLECTION.to_string());

        let admin_username = env::var("ADMIN_USERNAME").ok().filter(|s| !s.is_empty());
        let admin_password = env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty());

        Ok(Self {
            bcrypt_cost,
            enforce_field_rules,
            collection,
            admin_username,
            admin_password,
        })
    }

    /// Returns credentials in "username:password" format if the listing is protected
    pub fn admin_credentials(&self) -> Option<String> {
        match (&self.admin_username, &self.admin_password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: Self::DEFAULT_BCRYPT_COST,
            enforce_field_rules: false,
            collection: Self::DEFAULT_COLLECTION.to_string(),
            admin_username: None,
            admin_password: None,
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Sobreloja API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for Sobreloja registration".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl SignupClientConfig {
    const DEFAULT_API_BASE_URL: &'static str = "http://localhost:4000";
    const DEFAULT_VIACEP_BASE_URL: &'static str = "https://viacep.com.br";
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Base URLs are stored without a trailing `/`
    pub fn new(
        api_base_url: impl Into<String>,
        viacep_base_url: impl Into<String>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            viacep_base_url: viacep_base_url.into().trim_end_matches('/').to_string(),
            request_timeout,
        }
    }
}

impl Default for SignupClientConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_API_BASE_URL,
            Self::DEFAULT_VIACEP_BASE_URL,
            Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        )
    }
}

/// Parse a comma-separated list, dropping empty entries
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// bcrypt work factor, default 10, accepted range 4..=31
fn parse_bcrypt_cost(raw: Option<String>) -> Result<u32, String> {
    let cost = match raw.as_deref().map(str::trim) {
        None | Some("") => return Ok(RegistrationConfig::DEFAULT_BCRYPT_COST),
        Some(v) => v
            .parse::<u32>()
            .map_err(|_| "BCRYPT_COST must be a valid number".to_string())?,
    };

    if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        return Err(format!(
            "BCRYPT_COST must be between {} and {}",
            MIN_BCRYPT_COST, MAX_BCRYPT_COST
        ));
    }

    Ok(cost)
}

fn parse_bool(name: &str, raw: Option<String>) -> Result<bool, String> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => Err(format!("{} must be true or false (got '{}')", name, v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_trims_and_drops_empty() {
        assert_eq!(
            parse_list(" http://a.com, ,http://b.com "),
            vec!["http://a.com".to_string(), "http://b.com".to_string()]
        );
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("X", None), Ok(false));
        assert_eq!(parse_bool("X", Some("TRUE".to_string())), Ok(true));
        assert_eq!(parse_bool("X", Some("1".to_string())), Ok(true));
        assert_eq!(parse_bool("X", Some("false".to_string())), Ok(false));
        assert!(parse_bool("X", Some("yes".to_string())).is_err());
    }

    #[test]
    fn test_parse_bcrypt_cost_range() {
        assert_eq!(parse_bcrypt_cost(None), Ok(10));
        assert_eq!(parse_bcrypt_cost(Some("".to_string())), Ok(10));
        assert_eq!(parse_bcrypt_cost(Some("4".to_string())), Ok(4));
        assert_eq!(parse_bcrypt_cost(Some("31".to_string())), Ok(31));
        assert!(parse_bcrypt_cost(Some("3".to_string())).is_err());
        assert!(parse_bcrypt_cost(Some("32".to_string())).is_err());
        assert!(parse_bcrypt_cost(Some("ten".to_string())).is_err());
    }

    #[test]
    fn test_signup_client_config_trims_trailing_slash() {
        let config = SignupClientConfig::new(
            "http://localhost:4000/",
            "https://viacep.com.br//",
            Duration::from_secs(3),
        );
        assert_eq!(config.api_base_url, "http://localhost:4000");
        assert_eq!(config.viacep_base_url, "https://viacep.com.br");
        assert_eq!(config.request_timeout, Duration::from_secs(3));

        let defaults = SignupClientConfig::default();
        assert_eq!(defaults.api_base_url, "http://localhost:4000");
        assert_eq!(defaults.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_admin_credentials_require_both_parts() {
        let mut config = RegistrationConfig::default();
        assert_eq!(config.admin_credentials(), None);

        config.admin_username = Some("admin".to_string());
        assert_eq!(config.admin_credentials(), None);

        config.admin_password = Some("secret".to_string());
        assert_eq!(config.admin_credentials(), Some("admin:secret".to_string()));
    }

    #[test]
    fn test_registration_defaults() {
        let config = RegistrationConfig::default();
        assert_eq!(config.bcrypt_cost, 10);
        assert!(!config.enforce_field_rules);
        assert_eq!(config.collection, "registrations");
    }
}
