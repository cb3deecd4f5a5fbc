//! Identifier types passed to node actions.
//!
//! `Account`, `Wallet` and `PublicKey` are distinct newtypes over the raw
//! string the node expects, so an account cannot be handed to a parameter
//! that wants a wallet. None of them validate their contents; the node is
//! the authority on what a well-formed identifier looks like.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

// ==============================================================================
// Identifiers
// ==============================================================================

string_identifier!(
    /// An account address such as `xrb_3e3j5tkog48pnny9dmfzj1r16pg8t1e76dz5tmac6iq689wyjfpi00000000`.
    Account
);

string_identifier!(
    /// A wallet id: 64 hex characters naming a wallet held by the node.
    Wallet
);

string_identifier!(
    /// A 32-byte account public key in hex.
    PublicKey
);
