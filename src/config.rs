use crate::error::{Result, SyncError};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "tmdb-list-sync";
const CONFIG_NAME: &str = "config";

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    tmdb: Option<Credentials>,
}

/// TMDB credentials read from the `[tmdb]` table of the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub api_key: String,
    #[serde(default, rename = "access_token")]
    pub bearer_token: String,
    #[serde(default, deserialize_with = "account_id")]
    pub account_id: String,
    /// Only set when talking to something other than api.themoviedb.org.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

impl Credentials {
    /// Everything the list workflow needs.
    pub fn require_all(self) -> Result<Self> {
        let missing: Vec<&str> = [
            ("api_key", &self.api_key),
            ("access_token", &self.bearer_token),
            ("account_id", &self.account_id),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect();

        if !missing.is_empty() {
            return Err(SyncError::Configuration(format!(
                "missing value for {} in [tmdb]",
                missing.join(", ")
            )));
        }
        if self.account_id.trim() == "0" {
            return Err(SyncError::Configuration(
                "account_id is 0 in [tmdb]; run `tmdb-list-sync account` to look up the real id"
                    .into(),
            ));
        }
        Ok(self)
    }

    /// The account lookup only authenticates with the bearer token.
    pub fn require_token(self) -> Result<Self> {
        if self.bearer_token.trim().is_empty() {
            return Err(SyncError::Configuration(
                "missing value for access_token in [tmdb]".into(),
            ));
        }
        Ok(self)
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)
        .map_err(|e| SyncError::Configuration(error_chain(&e)))
}

/// Loads the `[tmdb]` table from `path`.
///
/// `confy` would write a default file when none exists; here a missing file
/// is an error so that nothing touches the network with empty credentials.
pub fn load_credentials(path: &Path) -> Result<Credentials> {
    if !path.is_file() {
        return Err(SyncError::Configuration(format!(
            "configuration file '{}' not found",
            path.display()
        )));
    }

    let cfg: ConfigFile = confy::load_path(path).map_err(|e| {
        SyncError::Configuration(format!("{}: {}", path.display(), error_chain(&e)))
    })?;

    cfg.tmdb.ok_or_else(|| {
        SyncError::Configuration(format!(
            "[tmdb] section not found in '{}'",
            path.display()
        ))
    })
}

// confy only says "Bad TOML data"; the line and field live in the source.
fn error_chain(err: &dyn StdError) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(cause.to_string().trim_end());
        source = cause.source();
    }
    msg
}

fn account_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct AccountIdVisitor;

    impl<'de> Visitor<'de> for AccountIdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an account id (a positive integer or a string)")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
            if v < 0 {
                return Err(E::invalid_value(Unexpected::Signed(v), &self));
            }
            Ok(v.to_string())
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(AccountIdVisitor)
}
