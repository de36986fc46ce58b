//! Conformance tests: fixed (content, SHA-1 digest, location) vectors.
//!
//! Each group is loaded into a fresh store. Every stored item must produce
//! exactly the expected digest, come back byte-for-byte through `load`,
//! `open` and `open_location`, and disappear after `unmount`. The groups
//! are independent: one store per group, so a digest from group A must
//! not resolve in the store of group B.

use memdigest_store::MemoryDigestStore;
use memdigest_types::{Algorithm, MountPoint};

// ── Vectors ───────────────────────────────────────────────────────────────────

struct Vector {
    content: &'static str,
    digest: &'static str,
    location: &'static str,
}

const GROUPS: &[&[Vector]] = &[
    &[],
    &[
        Vector {
            content: "Hello world!",
            digest: "d3486ae9136e7856bc42212385ea797094475802",
            location: "memdigest:sha-1:hexadecimal(d3486ae9136e7856bc42212385ea797094475802)/0",
        },
        Vector {
            content: "😏😐👾🤖😈",
            digest: "1af2b71ae04ddb01cc36cc615e64c950a50b04ff",
            location: "memdigest:sha-1:hexadecimal(1af2b71ae04ddb01cc36cc615e64c950a50b04ff)/0",
        },
        Vector {
            content: "ا ب پ ت ث ج چ ح خ د ذ ر ز ژ س ش ص ض ط ظ ع غ ف ق ک گ ل م ن و ه ی",
            digest: "8d92165a331ad6ba8ed1ad40507daf1122ce9830",
            location: "memdigest:sha-1:hexadecimal(8d92165a331ad6ba8ed1ad40507daf1122ce9830)/0",
        },
    ],
    &[
        Vector {
            content: "apple",
            digest: "d0be2dc421be4fcd0172e5afceea3970e2f3d940",
            location: "memdigest:sha-1:hexadecimal(d0be2dc421be4fcd0172e5afceea3970e2f3d940)/0",
        },
        Vector {
            content: "BANANA",
            digest: "467b410f79bfca07dcd16fe38e3497c3f6d2db2b",
            location: "memdigest:sha-1:hexadecimal(467b410f79bfca07dcd16fe38e3497c3f6d2db2b)/0",
        },
        Vector {
            content: "Cherry",
            digest: "d6eee90533dffc1f8e6622f9f09af16ed051bf48",
            location: "memdigest:sha-1:hexadecimal(d6eee90533dffc1f8e6622f9f09af16ed051bf48)/0",
        },
        Vector {
            content: "dATE",
            digest: "408ac259233f1b4f6aef295f7d4a7c43d61fb922",
            location: "memdigest:sha-1:hexadecimal(408ac259233f1b4f6aef295f7d4a7c43d61fb922)/0",
        },
    ],
];

/// A SHA-1 digest that none of the vectors produce.
const NON_EXISTENT: [u8; 20] = [
    0x59, 0xdb, 0x6b, 0xa4, 0xa6, 0xaf, 0xf5, 0xed, 0x3d, 0x98, 0x05, 0x42, 0xda, 0xf4, 0x1b, 0xe6,
    0x56, 0x24, 0xa1, 0xe8,
];

fn digest_bytes(hex_digest: &str) -> Vec<u8> {
    hex::decode(hex_digest).expect("vector digest is valid hex")
}

fn assert_absent(store: &MemoryDigestStore, digest: &[u8], context: &str) {
    assert!(store.load(digest).is_none(), "{context}: load should miss");
    let err = store
        .open("SHA-1", digest)
        .expect_err("open should fail for absent content");
    assert!(err.is_not_found(), "{context}: expected ContentNotFound, got {err}");
}

// ── Store / load / open ───────────────────────────────────────────────────────

#[test]
fn vectors_store_load_open_unmount() {
    for (group, vectors) in GROUPS.iter().enumerate() {
        let store = MemoryDigestStore::new();
        assert_absent(&store, &NON_EXISTENT, &format!("group {group} before store"));

        for vector in *vectors {
            let digest = store.store(vector.content.as_bytes()).unwrap();
            assert_eq!(digest.algorithm(), Algorithm::Sha1);
            assert_eq!(
                digest.to_hex(),
                vector.digest,
                "group {group}: digest of {:?}",
                vector.content
            );
        }

        for vector in *vectors {
            let digest = digest_bytes(vector.digest);

            let loaded = store.load(&digest).expect("stored content should load");
            assert_eq!(loaded, vector.content.as_bytes());

            let content = store.open("SHA-1", &digest).unwrap();
            assert_eq!(content.len(), vector.content.len());
            let mut buf = vec![0u8; content.len()];
            content.read_exact_at(&mut buf, 0).unwrap();
            assert_eq!(buf, vector.content.as_bytes());
        }

        assert_absent(&store, &NON_EXISTENT, &format!("group {group} after store"));

        store.unmount().unwrap();

        assert_absent(&store, &NON_EXISTENT, &format!("group {group} after unmount"));
        for vector in *vectors {
            assert_absent(
                &store,
                &digest_bytes(vector.digest),
                &format!("group {group} {:?} after unmount", vector.content),
            );
        }
    }
}

// ── Locations ─────────────────────────────────────────────────────────────────

#[test]
fn vectors_open_by_location() {
    for vectors in GROUPS {
        let store = MemoryDigestStore::new();
        for vector in *vectors {
            let digest = store.store(vector.content.as_bytes()).unwrap();
            assert_eq!(store.location_of(&digest), vector.location);
        }

        for vector in *vectors {
            let content = store
                .open_location(vector.location)
                .unwrap_or_else(|e| panic!("open_location({}) failed: {e}", vector.location));
            let mut reader = content.reader();
            let mut text = String::new();
            std::io::Read::read_to_string(&mut reader, &mut text).unwrap();
            assert_eq!(text, vector.content);
        }
    }
}

#[test]
fn groups_do_not_share_state() {
    let first = MemoryDigestStore::new();
    let second = MemoryDigestStore::new();
    for vector in GROUPS[1] {
        first.store(vector.content.as_bytes()).unwrap();
    }
    for vector in GROUPS[2] {
        second.store(vector.content.as_bytes()).unwrap();
    }

    for vector in GROUPS[1] {
        assert!(second.load(&digest_bytes(vector.digest)).is_none());
    }
    for vector in GROUPS[2] {
        assert!(first.load(&digest_bytes(vector.digest)).is_none());
    }
}

#[test]
fn hello_world_opens_under_sha1_name() {
    let store = MemoryDigestStore::new();
    let digest = store.store(b"Hello world!").unwrap();
    let content = store.open("SHA-1", digest.as_bytes()).unwrap();
    assert_eq!(content.as_bytes(), b"Hello world!");
}

#[test]
fn documented_examples_reproduce() {
    let store = MemoryDigestStore::new();
    let cases = [
        (
            "The request has been fulfilled and resulted in a new resource being created.",
            "0ce9ff3b12afdb3161751e3ab44987629523633d",
        ),
        (
            "The request has been accepted for processing, but the processing has not been completed.",
            "70cc03f611f457342c7bf69e7bd3ca0eabf17d75",
        ),
    ];
    for (content, expected) in cases {
        assert_eq!(store.store(content.as_bytes()).unwrap().to_hex(), expected);
    }
}
