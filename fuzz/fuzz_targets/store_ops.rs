#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use memdigest_store::MemoryDigestStore;
use memdigest_types::{Algorithm, MountPoint};

#[derive(Arbitrary, Debug)]
enum Op {
    Store(Vec<u8>),
    Load(Vec<u8>),
    Open(String, Vec<u8>),
    OpenLocation(String),
    Unmount,
}

// Fuzz target: arbitrary operation sequences against one store.
//
// Whatever the sequence, any content handed back must hash to the digest
// it was requested under.
fuzz_target!(|ops: Vec<Op>| {
    let store = MemoryDigestStore::new();
    for op in ops {
        match op {
            Op::Store(content) => {
                let digest = store.store(&content).expect("live store never fails");
                assert_eq!(store.load(digest.as_bytes()).as_deref(), Some(&content[..]));
            }
            Op::Load(digest) => {
                if let Some(content) = store.load(&digest) {
                    assert_eq!(Algorithm::Sha1.digest(&content).as_bytes(), &digest[..]);
                }
            }
            Op::Open(algorithm, digest) => {
                if let Ok(content) = store.open(&algorithm, &digest) {
                    assert_eq!(algorithm, "SHA-1");
                    assert_eq!(Algorithm::Sha1.digest(content.as_bytes()).as_bytes(), &digest[..]);
                }
            }
            Op::OpenLocation(location) => {
                let _ = store.open_location(&location);
            }
            Op::Unmount => {
                store.unmount().expect("unmount never fails");
                assert!(store.is_empty());
            }
        }
    }
});
