//! Engine lifecycle: chunking invariance, reset, repeatable results,
//! misuse latching, snapshots and redacted debug output.

use hashlite::md5::Md5;
use hashlite::sha1::Sha1;
use hashlite::sha256::Sha256;
use hashlite::sha512::Sha512;
use hashlite::{Error, HashEngine, HmacSha256, HmacSha512};

fn chunked_digest<E, const B: usize, const H: usize>(data: &[u8], step: usize) -> [u8; H]
where
    E: HashEngine<B, H>,
{
    let mut engine = E::default();
    for chunk in data.chunks(step) {
        engine.input(chunk);
    }
    engine.result().unwrap()
}

#[test]
#[allow(clippy::cast_possible_truncation)]
fn chunking_never_changes_the_digest() {
    let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();
    for step in [1, 3, 55, 56, 63, 64, 65, 111, 112, 127, 128, 129, 999] {
        assert_eq!(
            chunked_digest::<Md5, 64, 16>(&data, step),
            Md5::digest(&data),
            "md5, step {step}"
        );
        assert_eq!(
            chunked_digest::<Sha1, 64, 20>(&data, step),
            Sha1::digest(&data),
            "sha1, step {step}"
        );
        assert_eq!(
            chunked_digest::<Sha256, 64, 32>(&data, step),
            Sha256::digest(&data),
            "sha256, step {step}"
        );
        assert_eq!(
            chunked_digest::<Sha512, 128, 64>(&data, step),
            Sha512::digest(&data),
            "sha512, step {step}"
        );
    }
}

#[test]
fn reset_restores_a_fresh_engine() {
    let mut engine = Sha256::new();
    engine.input(b"some prefix that fills part of a block");
    engine.reset();
    engine.input(b"abc");
    assert_eq!(engine.result().unwrap(), Sha256::digest(b"abc"));
}

#[test]
fn results_repeat_and_late_input_latches() {
    let mut engine = Sha512::new();
    engine.input(b"payload");
    let first = engine.result().unwrap();
    assert_eq!(engine.result().unwrap(), first);

    engine.input(b"late");
    assert_eq!(engine.result(), Err(Error::AlreadyFinalized));
    assert_eq!(engine.result(), Err(Error::AlreadyFinalized));

    engine.reset();
    engine.input(b"payload");
    assert_eq!(engine.result().unwrap(), first);
}

#[test]
fn result_into_checks_the_slice_length() {
    let mut engine = Sha1::new();
    engine.input(b"abc");

    let mut short = [0u8; 19];
    assert_eq!(
        engine.result_into(&mut short),
        Err(Error::InvalidLength {
            expected: 20,
            got: 19
        })
    );

    // a failed length check does not finalize the engine
    let mut out = [0u8; 20];
    engine.result_into(&mut out).unwrap();
    assert_eq!(out, Sha1::digest(b"abc"));
}

#[test]
fn clones_snapshot_the_stream() {
    let mut engine = Sha256::new();
    engine.input(b"shared prefix|");
    let mut fork = engine.clone();
    engine.input(b"left");
    fork.input(b"right");
    assert_eq!(
        engine.result().unwrap(),
        Sha256::digest(b"shared prefix|left")
    );
    assert_eq!(
        fork.result().unwrap(),
        Sha256::digest(b"shared prefix|right")
    );
}

#[test]
fn debug_output_is_redacted() {
    let mut engine = Sha512::new();
    engine.input(b"secret material");
    assert_eq!(format!("{engine:?}"), "Sha512 { ... }");

    let mac = HmacSha256::new(b"secret key");
    assert_eq!(format!("{mac:?}"), "Hmac { ... }");
}

#[test]
fn engines_are_plain_owned_data() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Md5>();
    assert_send_sync::<Sha1>();
    assert_send_sync::<Sha256>();
    assert_send_sync::<Sha512>();
    assert_send_sync::<HmacSha512>();
}
