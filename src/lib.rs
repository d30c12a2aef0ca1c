// Copyright (C) 2022 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

//! A crate for interacting with the public Poloniex API. It exposes
//! one operation per supported command, hands response bodies through
//! without interpreting them, and surfaces errors that the service
//! reports inside a response.
//!
//! Trading commands require authentication and are not provided.

#[macro_use]
mod endpoint;

/// A module comprising the definitions of the public API commands.
pub mod api;
mod api_info;
mod client;
mod error;

use std::borrow::Cow;

type Str = Cow<'static, str>;

pub use crate::api_info::ApiInfo;
pub use crate::api_info::TRADING_API_URL;
pub use crate::client::Client;
pub use crate::endpoint::Endpoint;
pub use crate::endpoint::ErrorMessage;
pub use crate::error::Error;
pub use crate::error::RequestError;
