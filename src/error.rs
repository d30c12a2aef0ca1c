// Copyright (C) 2022 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::string::FromUtf8Error;

use http::Error as HttpError;
use hyper::Error as HyperError;
use serde_json::Error as JsonError;
use thiserror::Error as ThisError;
use url::ParseError;

use crate::endpoint::ErrorMessage;
use crate::Str;


fn fmt_err(err: &dyn StdError, fmt: &mut Formatter<'_>) -> FmtResult {
  write!(fmt, "{}", err)?;
  if let Some(src) = err.source() {
    write!(fmt, ": ")?;
    fmt_err(src, fmt)?;
  }
  Ok(())
}


/// An error type used by this crate.
#[derive(Debug)]
pub enum Error {
  /// An error directly originating in this crate.
  Str(Str),
  /// An URL parsing error.
  Url(ParseError),
}

impl Display for Error {
  fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
    match self {
      Error::Str(s) => write!(fmt, "{}", s),
      Error::Url(err) => fmt_err(err, fmt),
    }
  }
}

impl StdError for Error {}

impl From<ParseError> for Error {
  fn from(e: ParseError) -> Self {
    Error::Url(e)
  }
}


/// An error encountered while issuing a request.
#[derive(Debug, ThisError)]
pub enum RequestError {
  /// The service reported an error for the issued request.
  #[error("the service reported an error: {0}")]
  Remote(ErrorMessage),
  /// An error reported by the `hyper` crate.
  #[error("the hyper crate reported an error")]
  Hyper(#[from] HyperError),
  /// An error while assembling the HTTP request.
  #[error("failed to assemble the HTTP request")]
  Http(#[from] HttpError),
  /// A JSON conversion error.
  #[error("a JSON conversion failed")]
  Json(#[from] JsonError),
  /// The response body was not valid UTF-8.
  #[error("the response body is not valid UTF-8")]
  Utf8(#[from] FromUtf8Error),
}
