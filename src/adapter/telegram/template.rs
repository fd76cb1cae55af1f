//! HTML message templates.
//!
//! Truncation here is display-only: the two-place arbitrage percentage and the
//! whole-number profit are formatted from full-precision values that have
//! already been compared upstream.

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

use crate::port::ArbitrageNotice;

const EMOJI_CELEBRATION: &str = "&#127882;";

/// Render the arbitrage notification body.
pub fn arbitrage_notify(notice: &ArbitrageNotice, author_id: i64, author: &str) -> String {
    let mut arbitrage = format!("{}%", (notice.arbitrage * dec!(100)).trunc_with_scale(2));
    if notice.is_excited_arbitrage {
        arbitrage = format!("{EMOJI_CELEBRATION}{arbitrage}{EMOJI_CELEBRATION}");
    }

    let mut spread = notice.spread.to_string();
    if notice.is_excited_spread {
        spread = format!("{EMOJI_CELEBRATION}{spread}{EMOJI_CELEBRATION}");
    }

    format!(
        "<strong>&#128060;&#128060;&#128060;  Notify &#128060;&#128060;&#128060;</strong>\n\
         <strong>=======================</strong>\n\
         <strong>Spread: </strong><u>{spread}</u>\n\
         <strong>Invested Amount: </strong><u>{invest}</u>\n\
         <strong>{buy_exchange} Buy: </strong><u>{buy_price}</u>\n\
         <strong>{sell_exchange} Sell: </strong><u>{sell_price}</u>\n\
         <strong>Arbitrage: </strong><u>{arbitrage}</u>\n\
         <strong>Estimated Profit: </strong><u>{profit}</u>\n\
         <strong>Author: </strong><a href=\"tg://user?id={author_id}\">{author}</a>\n",
        spread = spread,
        invest = notice.invest_amount,
        buy_exchange = notice.exchange_buy,
        buy_price = notice.buy_price,
        sell_exchange = notice.exchange_sell,
        sell_price = notice.sell_price,
        arbitrage = arbitrage,
        profit = notice.profit.trunc_with_scale(0),
        author_id = author_id,
        author = author,
    )
}

/// Render the admin error notification body.
pub fn error_notify(title: &str, err_msg: &str, at: DateTime<Utc>) -> String {
    format!(
        "<strong> Error Notification </strong>\n\
         <strong>=======================</strong>\n\
         <strong>Title: </strong><u>{title}</u>\n\
         <strong>Error Message: </strong><u>{err_msg}</u>\n\
         <strong>Time: </strong><u>{time}</u>\n",
        title = title,
        err_msg = err_msg,
        time = at.format("%Y-%m-%d %H:%M:%S"),
    )
}
