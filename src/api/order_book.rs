// Copyright (C) 2022 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Str;


/// A request for the order book of a market.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderBookReq {
  /// The currency pair to retrieve the order book for. May be set to
  /// "all" to retrieve the order books of all markets.
  pub currency_pair: Option<String>,
  /// The maximum number of entries to retrieve per side of the book.
  pub depth: Option<u32>,
}


Endpoint! {
  /// The representation of a GET request for the returnOrderBook
  /// command.
  pub Get(OrderBookReq),
  command => "returnOrderBook",

  fn parameters(input: &Self::Input) -> Vec<(Str, Str)> {
    let mut params = Vec::new();
    if let Some(currency_pair) = &input.currency_pair {
      params.push(("currencyPair".into(), currency_pair.clone().into()));
    }
    if let Some(depth) = input.depth {
      params.push(("depth".into(), depth.to_string().into()));
    }
    params
  }
}
