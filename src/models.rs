//! Data types shared by the parsing pipeline, the web API, and the CLI.

use serde::{Deserialize, Serialize};

/// A file received for checking, either uploaded over HTTP or read from disk.
///
/// The filename is kept because format detection runs on its extension.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied filename.
    pub filename: String,
    /// Raw file bytes.
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }
}

/// One winning bond from the user's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondMatch {
    /// Canonical six digit bond number.
    #[serde(rename = "bondNumber")]
    pub bond_number: String,
    /// Prize label. Draw files carry no tier information after extraction,
    /// so every match reports the same label.
    pub prize: String,
}

/// Outcome of comparing a user bond list against a draw file.
///
/// `matches` preserves the order and multiplicity of the user's list. A bond
/// held twice that won appears twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matches: Vec<BondMatch>,
    /// Number of valid bond numbers found in the user's file, matched or not.
    #[serde(rename = "totalUserBonds")]
    pub total_user_bonds: usize,
}
