//! Request signing for authenticated Last.fm calls.
//!
//! # Signature Scheme
//!
//! - Drop `api_sig`, `format` and `callback`; they are sent but never signed
//! - Sort the remaining entries by key, comparing bytes
//! - Concatenate `key` and `value` for every entry, in order
//! - Append the shared secret and take the MD5 of the whole string
//!
//! The signature is the lowercase hex digest.

use md5::{Digest, Md5};

/// Name of the parameter carrying the signature.
pub const SIGNATURE_PARAM: &str = "api_sig";

/// Parameters left out of the signature base.
const UNSIGNED_PARAMS: [&str; 3] = [SIGNATURE_PARAM, "format", "callback"];

/// Compute MD5 hash of a string and return as hex string.
pub fn md5_hex(data: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(data.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Build the string that gets hashed for a set of canonical parameters.
pub fn signature_base(params: &[(String, String)], secret: &str) -> String {
    let mut entries: Vec<&(String, String)> = params
        .iter()
        .filter(|(key, _)| !UNSIGNED_PARAMS.contains(&key.as_str()))
        .collect();
    entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    let mut base = String::new();
    for (key, value) in entries {
        base.push_str(key);
        base.push_str(value);
    }
    base.push_str(secret);
    base
}

/// Sign canonical parameters with the shared secret.
pub fn sign(params: &[(String, String)], secret: &str) -> String {
    md5_hex(&signature_base(params, secret))
}
