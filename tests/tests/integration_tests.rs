//! Integration tests through the name-dispatched interface

use krypton_algorithms::{Algorithm, ChaCha20, Hc256, Salsa20};
use krypton_api::{Error, StreamCipher, StreamParameters};
use krypton_tests::vectors::VECTORS;
use krypton_tests::{engine_at, keystream};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_known_answer_vectors() {
    for vector in VECTORS {
        let expected = vector.keystream_bytes();
        let output = keystream(
            vector.algorithm,
            &vector.key_bytes(),
            &vector.iv_bytes(),
            vector.offset + expected.len(),
        )
        .unwrap();

        assert_eq!(
            hex::encode(&output[vector.offset..]),
            vector.keystream,
            "{} key {} iv {}",
            vector.algorithm,
            vector.key,
            vector.iv
        );
    }
}

#[test]
fn test_known_answer_vectors_in_pieces() {
    // Same vectors, fed one odd-sized chunk at a time.
    for vector in VECTORS {
        let expected = vector.keystream_bytes();
        let total = vector.offset + expected.len();
        let mut engine = engine_at(vector.algorithm, &vector.key_bytes(), &vector.iv_bytes(), 0)
            .unwrap();

        let mut output = vec![0u8; total];
        for chunk in output.chunks_mut(13) {
            engine.apply_keystream(chunk).unwrap();
        }

        assert_eq!(&output[vector.offset..], &expected[..]);
        assert_eq!(engine.position(), total as u64);
    }
}

#[test]
fn test_lookup_by_name() {
    for (name, canonical) in [
        ("Salsa20", "Salsa20"),
        ("chacha20", "ChaCha20"),
        ("HC-256", "HC-256"),
        ("hc256", "HC-256"),
    ] {
        let algorithm: Algorithm = name.parse().unwrap();
        assert_eq!(algorithm.construct().algorithm(), canonical);
    }

    assert_eq!(
        "AES".parse::<Algorithm>().unwrap_err(),
        Error::UnknownAlgorithm {
            name: "AES".to_string(),
        }
    );
}

#[test]
fn test_typed_and_dynamic_engines_agree() {
    let key = [0x6b; 32];
    let iv8 = [0x1d; 8];
    let iv32 = [0xd1; 32];

    let mut salsa = Salsa20::new();
    salsa.init(&key, &iv8).unwrap();
    let mut chacha = ChaCha20::new();
    chacha.init(&key, &iv8).unwrap();
    let mut hc = Hc256::new();
    hc.init(&key, &iv32).unwrap();

    let typed: [&mut dyn StreamCipher; 3] = [&mut salsa, &mut chacha, &mut hc];
    for engine in typed {
        let algorithm: Algorithm = engine.algorithm().parse().unwrap();
        let iv = engine.iv();

        let mut from_typed = vec![0u8; 150];
        engine.keystream(&mut from_typed).unwrap();

        assert_eq!(keystream(algorithm, &key, &iv, 150).unwrap(), from_typed);
    }
}

#[test]
fn test_parameters_resume_seekable() {
    let key = [0x21; 32];
    let iv = [0x12; 8];

    for algorithm in [Algorithm::Salsa20, Algorithm::ChaCha20] {
        let full = keystream(algorithm, &key, &iv, 500).unwrap();

        let mut first = engine_at(algorithm, &key, &iv, 0).unwrap();
        let head = first.process(&[0u8; 321]).unwrap();
        let params = first.parameters();
        assert_eq!(params, StreamParameters::new(iv.to_vec(), 321));

        let mut second = algorithm.construct();
        second.init_with(&key, &params).unwrap();
        let tail = second.process(&[0u8; 179]).unwrap();

        assert_eq!(head, &full[..321]);
        assert_eq!(tail, &full[321..]);
    }
}

#[test]
fn test_hc256_positional_init_rejected() {
    let err = engine_at(Algorithm::Hc256, &[0u8; 32], &[0u8; 32], 1).err();
    assert_eq!(
        err,
        Some(Error::UnsupportedSeek {
            algorithm: "HC-256",
            position: 1,
        })
    );

    let mut engine = Algorithm::Hc256.construct();
    assert_eq!(
        engine.seek(64),
        Err(Error::UnsupportedSeek {
            algorithm: "HC-256",
            position: 64,
        })
    );
    assert!(!engine.is_initialized());
}

#[test]
fn test_failed_init_is_atomic() {
    for algorithm in Algorithm::ALL {
        let key = [0x33; 32];
        let iv = vec![0x44; algorithm.iv_size()];
        let full = keystream(algorithm, &key, &iv, 100).unwrap();

        let mut engine = engine_at(algorithm, &key, &iv, 0).unwrap();
        let head = engine.process(&[0u8; 40]).unwrap();

        let short_iv = vec![0u8; algorithm.iv_size() - 1];
        assert_eq!(
            engine.init(&[0u8; 32], &short_iv),
            Err(Error::InvalidIvLength {
                algorithm: algorithm.name(),
                expected: algorithm.iv_size(),
                actual: algorithm.iv_size() - 1,
            })
        );
        assert_eq!(
            engine.init(&[0u8; 31], &iv),
            Err(Error::InvalidKeyLength {
                expected: 32,
                actual: 31,
            })
        );

        assert_eq!(engine.position(), 40);
        assert_eq!(engine.iv(), iv);
        let tail = engine.process(&[0u8; 60]).unwrap();

        assert_eq!(head, &full[..40]);
        assert_eq!(tail, &full[40..]);
    }
}

#[test]
fn test_uninitialized_engines() {
    for algorithm in Algorithm::ALL {
        let mut engine = algorithm.construct();
        let uninitialized = Err(Error::Uninitialized {
            algorithm: algorithm.name(),
        });

        assert_eq!(engine.process(b"data").map(|_| ()), uninitialized);
        assert_eq!(engine.reset(), uninitialized);
        assert_eq!(engine.seek(0), uninitialized);
        assert_eq!(engine.position(), 0);
    }
}

#[test]
fn test_reset_replays_stream() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for algorithm in Algorithm::ALL {
        let mut engine = algorithm.construct();
        let key = [0x5c; 32];
        let mut iv = vec![0u8; algorithm.iv_size()];
        rand::RngCore::fill_bytes(&mut rng, &mut iv);
        engine.init(&key, &iv).unwrap();

        let first = engine.process(&[0u8; 130]).unwrap();
        engine.reset().unwrap();
        let second = engine.process(&[0u8; 130]).unwrap();

        assert_eq!(first, second);
    }
}
