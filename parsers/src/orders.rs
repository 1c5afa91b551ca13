// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

use crate::date::Timestamp;
use crate::dom::Element;
use crate::error::Error;
use crate::util::{rows, rowset};

generate_attribute!(
    /// The state of a market order.
    OrderState, "order state", {
        /// Still on the market.
        Active => "0",

        /// Fulfilled.
        Closed => "1",

        /// Ran out of time.
        Expired => "2",

        /// Cancelled by the character.
        Cancelled => "3",

        /// Waiting to be placed.
        Pending => "4",

        /// Removed when the character was deleted.
        CharacterDeleted => "5",
    }
);

/// Which side of the market an order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderSide {
    /// A buy order.
    Buy,

    /// A sell order.
    Sell,
}

/// A market order.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketOrder {
    /// The unique id of this order.
    pub id: i64,

    /// Who placed it.
    pub char_id: i64,

    /// Where it was placed.
    pub station_id: i64,

    /// How many items were ordered.
    pub amount: i64,

    /// How many are left.
    pub amount_left: i64,

    /// The state of the order.
    pub status: OrderState,

    /// The type of item traded.
    pub type_id: i64,

    /// The range of a buy order, in jumps; -1 for station, 32767 for region.
    pub range: i64,

    /// The wallet division used.
    pub account_key: i64,

    /// How many days the order lasts.
    pub duration: i64,

    /// ISK held in escrow for a buy order.
    pub escrow: f64,

    /// The unit price.
    pub price: f64,

    /// Whether this is a buy or sell order.
    pub side: OrderSide,

    /// When it was issued.
    pub timestamp: Timestamp,
}

impl TryFrom<&Element> for MarketOrder {
    type Error = Error;

    fn try_from(row: &Element) -> Result<MarketOrder, Error> {
        let side = if get_attr!(row, "bid", Bool) {
            OrderSide::Buy
        } else {
            OrderSide::Sell
        };
        Ok(MarketOrder {
            id: get_attr!(row, "orderID", Required),
            char_id: get_attr!(row, "charID", Required),
            station_id: get_attr!(row, "stationID", Required),
            amount: get_attr!(row, "volEntered", Required),
            amount_left: get_attr!(row, "volRemaining", Required),
            status: get_attr!(row, "orderState", Required),
            type_id: get_attr!(row, "typeID", Required),
            range: get_attr!(row, "range", Required),
            account_key: get_attr!(row, "accountKey", Required),
            duration: get_attr!(row, "duration", Required),
            escrow: get_attr!(row, "escrow", Required),
            price: get_attr!(row, "price", Required),
            side,
            timestamp: get_attr!(row, "issued", Required),
        })
    }
}

/// Parse `char/MarketOrders`, keyed by order id.
pub fn parse_market_orders(result: &Element) -> Result<BTreeMap<i64, MarketOrder>, Error> {
    let mut orders = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let order = MarketOrder::try_from(row)?;
        orders.insert(order.id, order);
    }
    Ok(orders)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders() {
        let elem: Element = "<result><rowset name='orders' key='orderID'>
            <row orderID='2579890411' charID='91397530' stationID='60011866' volEntered='2120'
                 volRemaining='2120' minVolume='1' orderState='0' typeID='3689' range='32767'
                 accountKey='1000' duration='90' escrow='0.00' price='5100.00' bid='0'
                 issued='2012-07-12 15:58:53'/>
            <row orderID='2584848036' charID='91397530' stationID='60012550' volEntered='1'
                 volRemaining='1' minVolume='1' orderState='2' typeID='2030' range='-1'
                 accountKey='1000' duration='90' escrow='5.45' price='250000.00' bid='1'
                 issued='2012-07-14 20:51:16'/>
        </rowset></result>"
            .parse()
            .unwrap();
        let orders = parse_market_orders(&elem).unwrap();
        let sell = &orders[&2579890411];
        assert_eq!(sell.status, OrderState::Active);
        assert_eq!(sell.side, OrderSide::Sell);
        assert_eq!(sell.range, 32767);
        let buy = &orders[&2584848036];
        assert_eq!(buy.status, OrderState::Expired);
        assert_eq!(buy.side, OrderSide::Buy);
        assert_eq!(buy.escrow, 5.45);
        assert_eq!(buy.range, -1);
    }

    #[test]
    fn test_unknown_state() {
        let elem: Element = "<result><rowset name='orders'>
            <row orderID='1' charID='1' stationID='1' volEntered='1' volRemaining='1'
                 orderState='9' typeID='1' range='1' accountKey='1000' duration='1'
                 escrow='0' price='1' bid='0' issued='2012-07-12 15:58:53'/>
        </rowset></result>"
            .parse()
            .unwrap();
        match parse_market_orders(&elem) {
            Err(Error::InvalidValue { field: "orderState", .. }) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
