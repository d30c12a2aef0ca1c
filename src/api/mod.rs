// Copyright (C) 2022 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

/// Definitions for retrieving candlestick chart data.
pub mod chart_data;
/// Definitions pertaining the listed currencies.
pub mod currencies;
/// Definitions for retrieving loan offers and demands.
pub mod loan_orders;
/// Definitions for retrieving the order book of a market.
pub mod order_book;
/// Definitions for retrieving the ticker for all markets.
pub mod ticker;
/// Definitions for retrieving the trade history of a market.
pub mod trade_history;
/// Definitions pertaining 24 hour volumes.
pub mod volume;
