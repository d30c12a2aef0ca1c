// Copyright (C) 2022 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use http::Method;

use serde::Deserialize;

use crate::Str;


/// An error as reported by Poloniex inside a response body.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ErrorMessage {
  /// A message as provided by Poloniex.
  #[serde(rename = "error")]
  pub message: String,
}

impl Display for ErrorMessage {
  fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
    write!(fmt, "{}", self.message)
  }
}

impl Error for ErrorMessage {}


/// A trait describing a command of the public Poloniex API.
pub trait Endpoint {
  /// The type of the data being passed in as part of a request.
  type Input;

  /// The command invoked by requests to this endpoint.
  fn command() -> Str;

  /// The HTTP method to use for requests to this endpoint.
  fn method() -> Method {
    Method::GET
  }

  /// The query parameters to emit for the given input, in the order
  /// they appear on the wire.
  ///
  /// Absent optional parameters are omitted entirely, never emitted
  /// with an empty value.
  fn parameters(_input: &Self::Input) -> Vec<(Str, Str)> {
    Vec::new()
  }
}


/// A macro used for defining the properties for a request to a
/// particular command of the public API.
macro_rules! Endpoint {
  ( $(#[$docs:meta])* $pub:vis $name:ident($in:ty),
    command => $command:literal,
    $($defs:tt)* ) => {

    $(#[$docs])*
    #[derive(Clone, Copy, Debug)]
    $pub struct $name;

    impl crate::endpoint::Endpoint for $name {
      type Input = $in;

      fn command() -> crate::Str {
        $command.into()
      }

      $($defs)*
    }
  };
}
