//! Content addressing for payload requests.

use sha2::{Digest, Sha256};

/// Compute the payload id for a pair of input lists.
///
/// The encoding fed to SHA-256 is length-prefixed at both levels: each list
/// contributes its element count, then each element its byte length followed
/// by its bytes. This keeps the digest order-sensitive and unambiguous —
/// `(["ab"], ["c"])` and `(["a"], ["bc"])` encode differently, as do
/// `(["a"], ["b"])` and `(["a", "b"], [])` — which naive concatenation of
/// the lists would not guarantee.
pub fn payload_id<S: AsRef<str>>(list_1: &[S], list_2: &[S]) -> String {
    let mut hasher = Sha256::new();
    for list in [list_1, list_2] {
        hasher.update((list.len() as u64).to_be_bytes());
        for item in list {
            let bytes = item.as_ref().as_bytes();
            hasher.update((bytes.len() as u64).to_be_bytes());
            hasher.update(bytes);
        }
    }
    hex::encode(hasher.finalize())
}
