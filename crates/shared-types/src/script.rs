//! Script construction
//!
//! Only the building side is needed here: coinbase input scripts and simple
//! locking scripts. Script execution lives with signature verification.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opcodes used when building scripts.
pub mod opcodes {
    /// Push an empty array.
    pub const OP_0: u8 = 0x00;
    /// Next byte is the push length.
    pub const OP_PUSHDATA1: u8 = 0x4c;
    /// Next two bytes are the push length.
    pub const OP_PUSHDATA2: u8 = 0x4d;
    /// Next four bytes are the push length.
    pub const OP_PUSHDATA4: u8 = 0x4e;
    /// Push the number -1.
    pub const OP_1NEGATE: u8 = 0x4f;
    /// Push the number 1 (OP_2..OP_16 follow).
    pub const OP_1: u8 = 0x51;
    /// Marks an output as provably unspendable.
    pub const OP_RETURN: u8 = 0x6a;
    /// Check a signature against a public key.
    pub const OP_CHECKSIG: u8 = 0xac;
}

/// Raw script bytes.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    /// Empty script.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Script bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the script holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", hex::encode(&self.0))
    }
}

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

/// Minimal little-endian script-number encoding with sign bit.
pub fn encode_script_num(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut abs = value.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit of the last byte carries the sign; add a byte if it is taken
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }

    out
}

/// Incremental script builder.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    bytes: Vec<u8>,
}

impl ScriptBuilder {
    /// Start an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw opcode.
    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.bytes.push(opcode);
        self
    }

    /// Push an integer, using the small-integer opcodes where they apply.
    pub fn push_int(self, value: i64) -> Self {
        match value {
            0 => self.push_opcode(opcodes::OP_0),
            -1 => self.push_opcode(opcodes::OP_1NEGATE),
            1..=16 => self.push_opcode(opcodes::OP_1 + (value as u8 - 1)),
            _ => self.push_slice(&encode_script_num(value)),
        }
    }

    /// Push an integer as a data push of its script-number bytes, even when a
    /// small-integer opcode exists for it.
    pub fn push_num(self, value: i64) -> Self {
        self.push_slice(&encode_script_num(value))
    }

    /// Push a data slice with the shortest length prefix that fits.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < opcodes::OP_PUSHDATA1 as usize {
            self.bytes.push(len as u8);
        } else if len <= 0xff {
            self.bytes.push(opcodes::OP_PUSHDATA1);
            self.bytes.push(len as u8);
        } else if len <= 0xffff {
            self.bytes.push(opcodes::OP_PUSHDATA2);
            self.bytes.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.bytes.push(opcodes::OP_PUSHDATA4);
            self.bytes.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.bytes.extend_from_slice(data);
        self
    }

    /// Finish the script.
    pub fn into_script(self) -> Script {
        Script(self.bytes)
    }
}
