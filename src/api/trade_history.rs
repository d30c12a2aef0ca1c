// Copyright (C) 2022 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Str;


/// A request for the trade history of a market.
///
/// Without a start and end the past 200 trades are reported; with a
/// range up to 50,000 trades are.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TradeHistoryReq {
  /// The currency pair to retrieve the trade history for.
  pub currency_pair: Option<String>,
  /// The start of the range, as a UNIX timestamp.
  pub start: Option<u64>,
  /// The end of the range, as a UNIX timestamp.
  pub end: Option<u64>,
}


Endpoint! {
  /// The representation of a GET request for the returnTradeHistory
  /// command.
  pub Get(TradeHistoryReq),
  command => "returnTradeHistory",

  fn parameters(input: &Self::Input) -> Vec<(Str, Str)> {
    let mut params = Vec::new();
    if let Some(currency_pair) = &input.currency_pair {
      params.push(("currencyPair".into(), currency_pair.clone().into()));
    }
    if let Some(start) = input.start {
      params.push(("start".into(), start.to_string().into()));
    }
    if let Some(end) = input.end {
      params.push(("end".into(), end.to_string().into()));
    }
    params
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  use crate::api_info::ApiInfo;
  use crate::client::url;


  #[test]
  fn trade_history_url() {
    let request = TradeHistoryReq {
      currency_pair: Some("BTC_NXT".into()),
      start: Some(1410158341),
      end: Some(1410499372),
    };

    let url = url::<Get>(&ApiInfo::new(), &request);
    assert_eq!(
      url.as_str(),
      "https://poloniex.com/public?command=returnTradeHistory&currencyPair=BTC_NXT&start=1410158341&end=1410499372",
    );
  }

  #[test]
  fn trade_history_url_without_options() {
    let url = url::<Get>(&ApiInfo::new(), &TradeHistoryReq::default());
    assert_eq!(
      url.as_str(),
      "https://poloniex.com/public?command=returnTradeHistory",
    );
  }

  /// Absent parameters are skipped while the remaining ones keep their
  /// wire order.
  #[test]
  fn trade_history_url_with_end_only() {
    let request = TradeHistoryReq {
      currency_pair: None,
      start: None,
      end: Some(1410499372),
    };

    let url = url::<Get>(&ApiInfo::new(), &request);
    assert_eq!(
      url.as_str(),
      "https://poloniex.com/public?command=returnTradeHistory&end=1410499372",
    );
  }
}
