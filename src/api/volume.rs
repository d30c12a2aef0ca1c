// Copyright (C) 2022 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

Endpoint! {
  /// The representation of a GET request for the return24hVolume
  /// command, reporting the 24 hour volume for all markets as well as
  /// totals for the primary currencies.
  pub Get(()),
  command => "return24hVolume",
}
