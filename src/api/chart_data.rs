// Copyright (C) 2022 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Str;


/// A request for candlestick chart data of a market.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartDataReq {
  /// The currency pair to retrieve chart data for.
  pub currency_pair: Option<String>,
  /// The start of the date range, as a UNIX timestamp.
  pub start: Option<u64>,
  /// The end of the date range, as a UNIX timestamp.
  pub end: Option<u64>,
  /// The candlestick period in seconds. The service accepts the values
  /// 300, 900, 1800, 7200, 14400, and 86400; the value is forwarded
  /// as-is and anything else is rejected remotely.
  pub period: Option<u32>,
}


Endpoint! {
  /// The representation of a GET request for the returnChartData
  /// command.
  pub Get(ChartDataReq),
  command => "returnChartData",

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
    if let Some(period) = input.period {
      params.push(("period".into(), period.to_string().into()));
    }
    params
  }
}
