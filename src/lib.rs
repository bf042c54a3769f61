//! passwordmachine - Encrypted hierarchical password store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── create        # New empty database
//! │   ├── encrypt       # Plaintext JSON to ciphertext
//! │   ├── dump          # Ciphertext to plaintext JSON
//! │   ├── query         # Path lookup and regex search
//! │   ├── edit          # Set and remove
//! │   ├── prompt        # Passphrase input
//! │   └── output        # Terminal formatting
//! └── core/             # Record engine
//!     ├── cipher/       # Passphrase ciphers
//!     │   ├── mod       # Cipher trait, detection
//!     │   ├── age       # age scrypt (default)
//!     │   └── legacy    # aes256-cbc compatibility
//!     ├── envelope      # {version, data} codec and version gate
//!     ├── tree          # Record tree types
//!     ├── path          # get / set / remove by path
//!     ├── search        # Regex traversal
//!     ├── database      # Database handle
//!     ├── store         # Database file I/O
//!     └── config        # Settings file
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::cipher::CipherKind;
pub use crate::core::database::Database;
pub use crate::core::path::Lookup;
pub use crate::core::search::Match;
pub use crate::core::tree::{Kind, Namespace, Node};
