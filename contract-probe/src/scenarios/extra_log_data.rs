//! Funds a proxy with tokens and makes it relay a `transfer` to the
//! destination. The relayed call carries extra data that must reach the token
//! unchanged.

use crate::encoding::{encode_word, remove_0x};
use crate::error::Error;
use crate::scenarios::{
    assert_balance, TestContext, DESTINATION, PROXY_SOURCE, TOKEN_SOURCE, TRANSFER_SELECTOR,
};

/// Selector of `submitTransaction(address,uint256,bytes)` on the proxy.
const SUBMIT_SELECTOR: &str = "0xc6427474";

/// Selector of `executeTransaction()` on the proxy.
const EXECUTE_SELECTOR: &str = "0x0eb288f1";

/// Tokens sent to the proxy before the relay.
const PROXY_FUNDING: &str = "2000";

/// Tokens relayed to the destination, expected as final balance.
const RELAYED_AMOUNT: &str = "ead";

/// Offset of the `bytes` argument in `submitTransaction`: three head words.
const BYTES_OFFSET: &str = "60";

/// Length of the relayed calldata: selector plus two words.
const RELAYED_LENGTH: &str = "44";

/// Builds the calldata of `transfer(proxy_address, 0x2000)`.
pub(crate) fn fund_proxy(proxy_address: &str) -> String {
    format!(
        "{TRANSFER_SELECTOR}{}{}",
        encode_word(proxy_address),
        encode_word(PROXY_FUNDING)
    )
}

/// Builds the calldata of `submitTransaction(token_address, 0, data)` where
/// `data` is `transfer(DESTINATION, 0xead)`.
pub(crate) fn submit_relayed_transfer(token_address: &str) -> String {
    format!(
        "{SUBMIT_SELECTOR}{}{}{}{}{}{}{}",
        encode_word(token_address),
        encode_word("0"),
        encode_word(BYTES_OFFSET),
        encode_word(RELAYED_LENGTH),
        remove_0x(TRANSFER_SELECTOR),
        encode_word(DESTINATION),
        encode_word(RELAYED_AMOUNT)
    )
}

/// Deploys token and proxy, relays `0xead` tokens through the proxy and
/// checks the balance of the destination.
pub(crate) fn test_extra_log_data(context: &TestContext) -> Result<(), Error> {
    let token_code = context.compile(TOKEN_SOURCE)?;
    let proxy_code = context.compile(PROXY_SOURCE)?;
    let sender = context.sender()?;
    let token_address = context.deploy(&sender, &token_code)?;
    let proxy_address = context.deploy(&sender, &proxy_code)?;

    // Fund proxy contract with some tokens
    context.send_tx(&sender, &token_address, &fund_proxy(&proxy_address))?;

    // Submit tx to send from proxy to destination
    let submit_receipt = context.send_tx(
        &sender,
        &proxy_address,
        &submit_relayed_transfer(&token_address),
    )?;
    tracing::debug!(logs = submit_receipt.logs.len(), "Relay submitted");

    let exec_receipt = context.send_tx(&sender, &proxy_address, EXECUTE_SELECTOR)?;
    tracing::debug!(logs = exec_receipt.logs.len(), "Relay executed");

    let balance = context.balance_of(&token_address, DESTINATION)?;
    tracing::info!(%balance, "Destination balance");

    assert_balance(&balance, RELAYED_AMOUNT)?;
    Ok(())
}
