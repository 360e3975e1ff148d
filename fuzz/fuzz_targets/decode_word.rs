#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|word: u64| {
    let version = codec::decode(word);

    // Decoded versions that fit the layout must come back unchanged.
    if let Ok(again) = codec::encode(&version) {
        assert_eq!(codec::decode(again), version);
    }
});
