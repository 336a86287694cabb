// wallet-core/tests/golden_vectors.rs
//
// End-to-end vectors: phrase + 25th word → address

use phrase_wallet::{
    generate_account, CurveOps, DerivationConfig, DerivationPaths, EvmAddress, KeyDeriver,
    SecretPhrase, SeedDeriver,
};

const PHRASE: &str = "one two three four five six seven eight nine ten eleven twelve";

// (25th word, private key, address)
const VECTORS: [(&str, &str, &str); 3] = [
    (
        "",
        "0xf06993eab70705d0f5bfbabe0f786602648614ab19b3f1f5c662eb5bba4afbe9",
        "0x27ea1eaf09453181d946b1171adde62c0c31ca0e",
    ),
    (
        "one",
        "0xb19a2861917d72ffefcf9cd043b426866700167e7e4b72480f6001f2d0aefb52",
        "0x46ee16f948e2c252d323e5fef3f1dae9c2aad28a",
    ),
    (
        "two",
        "0x0ebb94561bf3430f837d3716c6d22351ce7dc8d1eac7774faae29d11e2277ae0",
        "0x8eaa2b1e659be0c1e4adbdf482e078e1bddf1636",
    ),
];

fn config(passphrase: &str) -> DerivationConfig {
    DerivationConfig::ethereum(SecretPhrase::new(PHRASE).unwrap()).with_passphrase(passphrase)
}

fn is_lower_hex_address(address: &str) -> bool {
    address.len() == 42
        && address.starts_with("0x")
        && address[2..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[test]
fn test_golden_addresses() {
    for (passphrase, _, expected) in VECTORS {
        let account = generate_account(&config(passphrase)).unwrap();
        assert_eq!(account.address_hex(), expected, "passphrase {:?}", passphrase);
    }
}

#[test]
fn test_golden_private_keys() {
    for (passphrase, expected, _) in VECTORS {
        let account = generate_account(&config(passphrase)).unwrap();
        assert_eq!(
            account.private_key_hex().as_str(),
            expected,
            "passphrase {:?}",
            passphrase
        );
    }
}

#[test]
fn test_golden_addresses_step_by_step() {
    for (passphrase, private_key, expected) in VECTORS {
        let salt = SeedDeriver::salt(passphrase);
        let seed = SeedDeriver::derive_seed(PHRASE, &salt).unwrap();
        let key = KeyDeriver::derive_indices(&seed, &DerivationPaths::ethereum_default()).unwrap();
        assert_eq!(format!("0x{}", hex::encode(key.private_key())), private_key);
        let public_key = CurveOps::public_point(key.private_key()).unwrap();
        let address = EvmAddress::derive_bytes(&public_key);
        assert_eq!(EvmAddress::to_hex(&address), expected);
    }
}

#[test]
fn test_deterministic_output() {
    let a = generate_account(&config("one")).unwrap();
    let b = generate_account(&config("one")).unwrap();
    assert_eq!(a.private_key_hex(), b.private_key_hex());
    assert_eq!(a.address_hex(), b.address_hex());
}

#[test]
fn test_output_shapes() {
    for (passphrase, _, _) in VECTORS {
        let account = generate_account(&config(passphrase)).unwrap();
        assert!(is_lower_hex_address(&account.address_hex()));

        let private_key = account.private_key_hex();
        assert_eq!(private_key.len(), 66);
        assert!(private_key[2..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

#[test]
fn test_passphrase_sensitivity() {
    let addresses: Vec<String> = VECTORS
        .iter()
        .map(|(passphrase, _, _)| generate_account(&config(passphrase)).unwrap().address_hex())
        .collect();
    assert_ne!(addresses[0], addresses[1]);
    assert_ne!(addresses[1], addresses[2]);
    assert_ne!(addresses[0], addresses[2]);
}

#[test]
fn test_whitespace_phrase_is_a_phrase() {
    let config = DerivationConfig::ethereum(SecretPhrase::new("   ").unwrap());
    let account = generate_account(&config).unwrap();
    assert_eq!(
        account.private_key_hex().as_str(),
        "0x4f3c8bb9173f0b35560d29821d14b29e0a121229ce3766b666d696d5fa5024aa"
    );
    assert_eq!(
        account.address_hex(),
        "0x8d82609691a8d051beb6e12e30068130a29af83b"
    );
}

#[test]
fn test_every_stage_key_in_range() {
    let seed = SecretPhrase::new(PHRASE).unwrap().to_seed(None).unwrap();
    let path = DerivationPaths::ethereum_default();
    for depth in 0..=path.len() {
        let key = KeyDeriver::derive_indices(&seed, &path[..depth]).unwrap();
        // public_point rejects 0 and >= n
        assert!(CurveOps::public_point(key.private_key()).is_ok());
    }
}
