//! Parameter and result types of the RPC methods used by the harness.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::encoding::to_hex_quantity;

/// The block at which a read-only call or a log query is evaluated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BlockTag {
    /// The most recent mined block.
    #[default]
    Latest,
    /// The genesis block.
    Earliest,
    /// The block being built.
    Pending,
    /// A specific block height.
    Number(u64),
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockTag::Latest => write!(f, "latest"),
            BlockTag::Earliest => write!(f, "earliest"),
            BlockTag::Pending => write!(f, "pending"),
            BlockTag::Number(number) => write!(f, "{}", to_hex_quantity(*number)),
        }
    }
}

impl Serialize for BlockTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// First parameter of `personal_sendTransaction`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Sender account, unlocked with an empty passphrase.
    pub from: String,
    /// Destination. `None` is serialised as `null` and creates a contract.
    pub to: Option<String>,
    /// Gas limit as hex quantity.
    pub gas: String,
    /// Gas price as hex quantity.
    pub gas_price: String,
    /// Calldata or contract bytecode.
    pub data: String,
}

/// First parameter of `eth_call`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    /// Address of the contract.
    pub to: String,
    /// Calldata.
    pub data: String,
}

/// Parameter of `eth_getLogs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFilter {
    /// Address of the contract emitting the logs.
    pub address: String,
    /// First block of the range.
    pub from_block: BlockTag,
    /// Last block of the range (inclusive).
    pub to_block: BlockTag,
    /// Topics to match. `None` matches any topic in that position.
    pub topics: Vec<Option<String>>,
}

/// The subset of a transaction receipt used by the harness. All the other
/// fields returned by the node are kept in `other`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Hash of the transaction.
    pub transaction_hash: Option<String>,
    /// `0x1` on success, `0x0` on failure.
    pub status: Option<String>,
    /// Address of the contract created by the transaction, if any.
    pub contract_address: Option<String>,
    /// Logs emitted during execution.
    #[serde(default)]
    pub logs: Vec<Value>,
    /// Remaining fields of the receipt.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl TransactionReceipt {
    /// The receipt status of a successful transaction.
    pub const STATUS_SUCCESS: &'static str = "0x1";

    /// Returns `true` if the receipt status is [`Self::STATUS_SUCCESS`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(Self::STATUS_SUCCESS)
    }
}
