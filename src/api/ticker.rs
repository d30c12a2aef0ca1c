// Copyright (C) 2022 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

Endpoint! {
  /// The representation of a GET request for the returnTicker command,
  /// reporting the ticker for all markets.
  pub Get(()),
  command => "returnTicker",
}
