// Copyright (C) 2022 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::env::var_os;
use std::ffi::OsString;

use url::Url;

use crate::Error;

/// The base URL of the public API to use.
const ENV_API_URL: &str = "POLONIEX_API_URL";

/// The default base URL of the public API.
const DEFAULT_API_URL: &str = "https://poloniex.com/public";

/// The URL of the trading API.
///
/// Trading commands require authentication and no command provided by
/// this crate uses this URL.
pub const TRADING_API_URL: &str = "https://poloniex.com/tradingApi";


/// An object encapsulating the information used for working with the
/// Poloniex API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiInfo {
  /// The base URL for API requests.
  pub(crate) api_url: Url,
}

impl ApiInfo {
  /// Create an `ApiInfo` object assuming the default public API URL.
  pub fn new() -> Self {
    Self {
      api_url: Url::parse(DEFAULT_API_URL).unwrap(),
    }
  }

  /// Create an `ApiInfo` object with information from the environment.
  ///
  /// This constructor retrieves API related information from the
  /// environment and performs some preliminary validation on it. The
  /// following information is used:
  /// - the Poloniex API base URL is retrieved from the
  ///   POLONIEX_API_URL variable, falling back to the canonical public
  ///   URL if unset
  pub fn from_env() -> Result<Self, Error> {
    let api_url = var_os(ENV_API_URL)
      .unwrap_or_else(|| OsString::from(DEFAULT_API_URL))
      .into_string()
      .map_err(|_| {
        Error::Str(
          format!(
            "{} environment variable is not a valid string",
            ENV_API_URL
          )
          .into(),
        )
      })?;
    let api_url = Url::parse(&api_url)?;

    Ok(Self { api_url })
  }
}

impl Default for ApiInfo {
  fn default() -> Self {
    Self::new()
  }
}


#[cfg(test)]
mod tests {
  use super::*;


  /// Verify that we can create an `ApiInfo` object with the default
  /// URL.
  #[test]
  fn create_api_info() {
    let api_info = ApiInfo::new();
    assert_eq!(api_info.api_url.as_str(), DEFAULT_API_URL);
  }

  /// Check that the trading API URL is well formed, even though no
  /// command of this crate uses it.
  #[test]
  fn parse_trading_api_url() {
    let _ = Url::parse(TRADING_API_URL).unwrap();
  }
}
