// Copyright (C) 2022 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Str;


/// A request for the loan offers and demands of a currency.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoanOrdersReq {
  /// The currency to retrieve loan orders for.
  pub currency: Option<String>,
}


Endpoint! {
  /// The representation of a GET request for the returnLoanOrders
  /// command.
  pub Get(LoanOrdersReq),
  command => "returnLoanOrders",

  fn parameters(input: &Self::Input) -> Vec<(Str, Str)> {
    let mut params = Vec::new();
    if let Some(currency) = &input.currency {
      params.push(("currency".into(), currency.clone().into()));
    }
    params
  }
}
