//! Sends `transfer` with one more 32-byte word than its signature declares.
//!
//! The token under test credits the destination with the value of the extra
//! word instead of the declared amount.

use crate::encoding::encode_word;
use crate::error::Error;
use crate::scenarios::{assert_balance, TestContext, DESTINATION, TOKEN_SOURCE, TRANSFER_SELECTOR};

/// Amount declared in the `transfer` arguments.
const DECLARED_AMOUNT: &str = "10";

/// Value of the extra trailing word, expected as final balance.
const EXTRA_WORD: &str = "21";

/// Builds the calldata of `transfer(DESTINATION, 0x10)` followed by the word
/// `0x21`.
pub(crate) fn transfer_with_extra_parameter() -> String {
    format!(
        "{TRANSFER_SELECTOR}{}{}{}",
        encode_word(DESTINATION),
        encode_word(DECLARED_AMOUNT),
        encode_word(EXTRA_WORD)
    )
}

/// Deploys the token, sends the padded `transfer` and checks that the
/// destination holds `0x21` tokens.
pub(crate) fn test_extra_parameter(context: &TestContext) -> Result<(), Error> {
    let code = context.compile(TOKEN_SOURCE)?;
    let sender = context.sender()?;
    let token_address = context.deploy(&sender, &code)?;

    // Call transfer() including an extra parameter, with a different value
    context.send_tx(&sender, &token_address, &transfer_with_extra_parameter())?;

    let balance = context.balance_of(&token_address, DESTINATION)?;
    tracing::info!(%balance, "Destination balance");

    // It should be the value sent in the extra param
    assert_balance(&balance, EXTRA_WORD)?;
    Ok(())
}
