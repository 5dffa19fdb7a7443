//! Cross-checks against an independent implementation, covering every
//! padding-path boundary twice over.

use hashlite::{sha256, sha512, HashEngine};
use sha2::Digest;

#[test]
#[allow(clippy::cast_possible_truncation)]
fn digests_match_the_sha2_crate_for_lengths_up_to_300() {
    let data: Vec<u8> = (0..300).map(|i| (i % 251) as u8).collect();
    for len in 0..=data.len() {
        let slice = &data[..len];
        assert_eq!(
            sha256::Sha256::digest(slice)[..],
            sha2::Sha256::digest(slice)[..],
            "sha256, length {len}"
        );
        assert_eq!(
            sha512::Sha512::digest(slice)[..],
            sha2::Sha512::digest(slice)[..],
            "sha512, length {len}"
        );
    }
}
