#![no_main]

use libfuzzer_sys::fuzz_target;
use memdigest_location::{LocationFormat, split_location};

// Fuzz target: location parsing.
//
// Catches bugs in:
// - Prefix/suffix overlap on short inputs
// - Multi-byte UTF-8 at the prefix or suffix boundary
// - Odd-length and non-hex payloads
// Any location that parses must format back to the same digest.
fuzz_target!(|location: &str| {
    let format = LocationFormat::new("sha-1");
    if let Ok(digest) = format.parse(location) {
        let again = format.parse(&format.format(&digest)).expect("formatted location parses");
        assert_eq!(again, digest);
    }
    if let Ok((slug, digest)) = split_location(location) {
        assert_eq!(LocationFormat::new(slug).parse(location), Ok(digest));
    }
});
