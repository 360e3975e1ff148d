#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(version) = pep440::parse(text) else {
        return;
    };
    assert_eq!(version.to_string().parse::<pep440::Version>(), Ok(version.clone()));
    if let Ok(word) = codec::encode(&version) {
        assert_eq!(codec::decode(word), version);
    }
});
