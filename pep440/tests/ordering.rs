use pep440::Version;
use proptest::prelude::*;

fn v(text: &str) -> Version {
    text.parse().unwrap()
}

#[test]
fn pep440_reference_ordering() {
    let ordered = [
        "1.0.dev456",
        "1.0a1",
        "1.0a2.dev456",
        "1.0a12.dev456",
        "1.0a12",
        "1.0b1.dev456",
        "1.0b2",
        "1.0b2.post345.dev456",
        "1.0b2.post345",
        "1.0b2-346",
        "1.0c1.dev456",
        "1.0c1",
        "1.0rc2",
        "1.0c3",
        "1.0",
        "1.0.post456.dev34",
        "1.0.post456",
        "1.1.dev1",
        "1!0.1",
    ];
    for pair in ordered.windows(2) {
        assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
    }
}

#[test]
fn normalized_spellings_are_equal() {
    assert_eq!(v("1.0alpha1"), v("1.0a1"));
    assert_eq!(v("1.0-c1"), v("1.0rc1"));
    assert_eq!(v("1.0-1"), v("1.0.post1"));
    assert_eq!(v("1.0.0"), v("1"));
    assert_eq!(v("0!1.0"), v("1.0"));
}

fn version_strategy() -> impl Strategy<Value = Version> {
    (
        0u64..3,
        prop::collection::vec(0u64..4, 1..5),
        prop::option::of((0usize..3, 0u64..3)),
        prop::option::of(0u64..3),
        prop::option::of(0u64..3),
    )
        .prop_map(|(epoch, release, pre, post, dev)| {
            Version::new(release)
                .with_epoch(epoch)
                .with_pre(pre.map(|(kind, n)| pep440::PreRelease::new(pep440::PreReleaseKind::ALL[kind], n)))
                .with_post(post)
                .with_dev(dev)
        })
}

proptest! {
    #[test]
    fn prop_display_parse_roundtrip(version in version_strategy()) {
        let reparsed: Version = version.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, version);
    }

    #[test]
    fn prop_order_is_total_and_antisymmetric(a in version_strategy(), b in version_strategy()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a == b, a.cmp(&b).is_eq());
    }
}
