// Copyright (C) 2022 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::str::from_utf8;

use http::request::Builder as HttpRequestBuilder;
use http::Request;

use hyper::body::to_bytes;
use hyper::client::HttpConnector;
use hyper::Body;
use hyper::Client as HttpClient;
use hyper_tls::HttpsConnector;

use serde_json::from_slice;

use tracing::debug;
use tracing::instrument;
use tracing::span;
use tracing::trace;
use tracing::Level;
use tracing_futures::Instrument;

use url::Url;

use crate::api::chart_data;
use crate::api::currencies;
use crate::api::loan_orders;
use crate::api::order_book;
use crate::api::ticker;
use crate::api::trade_history;
use crate::api::volume;
use crate::api_info::ApiInfo;
use crate::endpoint::Endpoint;
use crate::endpoint::ErrorMessage;
use crate::error::Error;
use crate::error::RequestError;

/// The query parameter used for selecting the command to invoke.
const COMMAND_PARAM: &str = "command";

/// The substring marking a reported error in a response body.
const ERROR_MARKER: &str = "\"error\":";

type Backend = HttpClient<HttpsConnector<HttpConnector>, Body>;


/// Build the URL for a request to the provided endpoint.
pub(crate) fn url<E>(api_info: &ApiInfo, input: &E::Input) -> Url
where
  E: Endpoint,
{
  let mut url = api_info.api_url.clone();
  url
    .query_pairs_mut()
    .append_pair(COMMAND_PARAM, E::command().as_ref());

  for (name, value) in E::parameters(input) {
    url.query_pairs_mut().append_pair(name.as_ref(), value.as_ref());
  }
  url
}


/// Create a `Request` to the endpoint.
fn request<E>(api_info: &ApiInfo, input: &E::Input) -> Result<Request<Body>, RequestError>
where
  E: Endpoint,
{
  let url = url::<E>(api_info, input);
  let request = HttpRequestBuilder::new()
    .method(E::method())
    .uri(url.as_str())
    .body(Body::empty())?;

  Ok(request)
}


/// Evaluate the body of a completed response.
///
/// A body containing the error marker is treated as a reported error
/// and parsed for the message it carries. Anything else is handed
/// through unparsed; decoding the payload is left to the caller.
fn evaluate(body: &[u8]) -> Result<String, RequestError> {
  let text = String::from_utf8(body.to_vec())?;
  if text.contains(ERROR_MARKER) {
    let message = from_slice::<ErrorMessage>(body)?;
    Err(RequestError::Remote(message))
  } else {
    Ok(text)
  }
}


/// A `Client` is the entity used by clients of this module for
/// interacting with the public Poloniex API.
#[derive(Debug)]
pub struct Client {
  api_info: ApiInfo,
  client: Backend,
}

impl Client {
  /// Create a new `Client` using the given API information.
  pub fn new(api_info: ApiInfo) -> Self {
    let client = HttpClient::builder().build(HttpsConnector::new());
    Self { api_info, client }
  }

  /// Create a new `Client` with information from the environment.
  pub fn from_env() -> Result<Self, Error> {
    let api_info = ApiInfo::from_env()?;
    Ok(Self::new(api_info))
  }

  /// Create and issue a request to the given endpoint and hand through
  /// the raw response body.
  #[instrument(level = "debug", skip(self, input))]
  pub async fn issue<E>(&self, input: E::Input) -> Result<String, RequestError>
  where
    E: Endpoint,
  {
    let req = request::<E>(&self.api_info, &input)?;
    let span = span!(
      Level::DEBUG,
      "request",
      method = display(&req.method()),
      url = display(&req.uri()),
    );

    async move {
      debug!("requesting");
      trace!(request = debug(&req));

      let result = self.client.request(req).await?;
      let status = result.status();
      debug!(status = debug(&status));
      trace!(response = debug(&result));

      let bytes = to_bytes(result.into_body()).await?;
      let body = bytes.as_ref();

      match from_utf8(body) {
        Ok(s) => trace!(body = display(&s)),
        Err(b) => trace!(body = display(&b)),
      }

      evaluate(body)
    }
    .instrument(span)
    .await
  }

  /// Retrieve the ticker for all markets.
  pub async fn ticker(&self) -> Result<String, RequestError> {
    self.issue::<ticker::Get>(()).await
  }

  /// Retrieve the 24 hour volume for all markets, plus totals for the
  /// primary currencies.
  pub async fn volume_24h(&self) -> Result<String, RequestError> {
    self.issue::<volume::Get>(()).await
  }

  /// Retrieve the order book for a market, or for all markets if the
  /// currency pair is set to "all".
  pub async fn order_book(
    &self,
    request: order_book::OrderBookReq,
  ) -> Result<String, RequestError> {
    self.issue::<order_book::Get>(request).await
  }

  /// Retrieve the past 200 trades for a market, or up to 50,000 trades
  /// in the range given by the start and end parameters.
  pub async fn trade_history(
    &self,
    request: trade_history::TradeHistoryReq,
  ) -> Result<String, RequestError> {
    self.issue::<trade_history::Get>(request).await
  }

  /// Retrieve candlestick chart data for a market.
  pub async fn chart_data(
    &self,
    request: chart_data::ChartDataReq,
  ) -> Result<String, RequestError> {
    self.issue::<chart_data::Get>(request).await
  }

  /// Retrieve information about the listed currencies.
  pub async fn currencies(&self) -> Result<String, RequestError> {
    self.issue::<currencies::Get>(()).await
  }

  /// Retrieve the list of loan offers and demands for a currency.
  pub async fn loan_orders(
    &self,
    request: loan_orders::LoanOrdersReq,
  ) -> Result<String, RequestError> {
    self.issue::<loan_orders::Get>(request).await
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  use test_log::test;

  use wiremock::matchers::method;
  use wiremock::matchers::query_param;
  use wiremock::Mock;
  use wiremock::MockServer;
  use wiremock::ResponseTemplate;

  use crate::api::order_book::OrderBookReq;


  /// Create a `Client` directed at the given mock server.
  fn mock_client(server: &MockServer) -> Client {
    let api_info = ApiInfo {
      api_url: Url::parse(&server.uri()).unwrap(),
    };
    Client::new(api_info)
  }


  /// Check that a response body without the error marker is handed
  /// through unparsed.
  #[test]
  fn evaluate_hands_body_through() {
    let body = br#"{"BTC_LTC":{"last":"0.0251","lowestAsk":"0.02589999"}}"#;
    assert_eq!(evaluate(body).unwrap(), from_utf8(body).unwrap());
  }

  /// Check that a body containing the error marker yields the reported
  /// message.
  #[test]
  fn evaluate_extracts_reported_error() {
    let body = br#"{"error":"Invalid currency pair."}"#;
    match evaluate(body) {
      Err(RequestError::Remote(err)) => assert_eq!(err.message, "Invalid currency pair."),
      result => panic!("unexpected result: {:?}", result),
    }
  }

  /// A body containing the error marker in a nested position matches
  /// the detection heuristic but does not parse into the error shape.
  #[test]
  fn evaluate_nested_marker_fails_to_parse() {
    let body = br#"{"result":{"error":"broken"}}"#;
    match evaluate(body) {
      Err(RequestError::Json(_)) => (),
      result => panic!("unexpected result: {:?}", result),
    }
  }

  #[test(tokio::test)]
  async fn issue_hands_through_raw_body() {
    let body = r#"{"BTC_NXT":{"last":"0.00005730"},"BTC_XMR":{"last":"0.00404104"}}"#;
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(query_param("command", "returnTicker"))
      .respond_with(ResponseTemplate::new(200).set_body_string(body))
      .expect(1)
      .mount(&server)
      .await;

    let client = mock_client(&server);
    let ticker = client.ticker().await.unwrap();
    assert_eq!(ticker, body);
  }

  #[test(tokio::test)]
  async fn issue_reports_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"error":"Invalid command."}"#))
      .mount(&server)
      .await;

    let client = mock_client(&server);
    let request = OrderBookReq {
      currency_pair: Some("BTC_NXT".into()),
      depth: Some(10),
    };

    match client.order_book(request).await {
      Err(RequestError::Remote(err)) => assert_eq!(err.message, "Invalid command."),
      result => panic!("unexpected result: {:?}", result),
    }
  }

  /// The HTTP status code plays no part in classifying a response.
  #[test(tokio::test)]
  async fn issue_ignores_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
      .mount(&server)
      .await;

    let client = mock_client(&server);
    assert_eq!(client.currencies().await.unwrap(), "not found");
  }

  #[test(tokio::test)]
  async fn issue_rejects_non_utf8_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xf0, 0x28, 0x8c, 0x28]))
      .mount(&server)
      .await;

    let client = mock_client(&server);
    match client.ticker().await {
      Err(RequestError::Utf8(_)) => (),
      result => panic!("unexpected result: {:?}", result),
    }
  }

  /// A transport level failure surfaces as a `hyper` error.
  #[test(tokio::test)]
  async fn issue_propagates_transport_failure() {
    let server = MockServer::start().await;
    let api_info = ApiInfo {
      api_url: Url::parse(&server.uri()).unwrap(),
    };
    drop(server);

    let client = Client::new(api_info);
    match client.ticker().await {
      Err(RequestError::Hyper(_)) => (),
      result => panic!("unexpected result: {:?}", result),
    }
  }

  /// Check that consecutive calls are independent requests with
  /// independent results.
  #[test(tokio::test)]
  async fn issue_twice_issues_two_requests() {
    let body = r#"{"1CR":{"txFee":"0.01000000","delisted":0}}"#;
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(query_param("command", "returnCurrencies"))
      .respond_with(ResponseTemplate::new(200).set_body_string(body))
      .expect(2)
      .mount(&server)
      .await;

    let client = mock_client(&server);
    let first = client.currencies().await.unwrap();
    let second = client.currencies().await.unwrap();
    assert_eq!(first, second);
  }
}
