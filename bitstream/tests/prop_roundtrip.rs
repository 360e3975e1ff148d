use bitstream::{extract, low_mask, BitWriter, WORD_BITS};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Bit(bool),
    Bits { bits: u8, value: u64 },
}

impl Op {
    const fn width(&self) -> u8 {
        match self {
            Self::Bit(_) => 1,
            Self::Bits { bits, .. } => *bits,
        }
    }

    fn value(&self) -> u64 {
        match self {
            Self::Bit(b) => u64::from(*b),
            Self::Bits { value, .. } => *value,
        }
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Bit),
        (1u8..=16, any::<u64>()).prop_map(|(bits, value)| Op::Bits {
            bits,
            value: value & low_mask(bits),
        }),
    ]
}

/// Keeps the leading ops that fit into one word.
fn fitting(ops: Vec<Op>) -> Vec<Op> {
    let mut used = 0u8;
    ops.into_iter()
        .take_while(|op| {
            let next = used + op.width();
            if next > WORD_BITS {
                return false;
            }
            used = next;
            true
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..24).prop_map(fitting)) {
        let mut writer = BitWriter::new();
        for op in &ops {
            match op {
                Op::Bit(b) => writer.write_bool(*b).unwrap(),
                Op::Bits { bits, value } => writer.write_bits(*value, *bits).unwrap(),
            }
        }
        let word = writer.finish();

        let mut shift = WORD_BITS;
        for op in &ops {
            shift -= op.width();
            prop_assert_eq!(extract(word, shift, op.width()), op.value());
        }
        // Unwritten bits stay zero.
        prop_assert_eq!(extract(word, 0, shift), 0);
    }

    #[test]
    fn prop_word_order_follows_first_field(
        a in 0u64..=0xFFF,
        b in 0u64..=0xFFF,
        rest_a in any::<u64>(),
        rest_b in any::<u64>(),
    ) {
        prop_assume!(a != b);
        let pack = |head: u64, tail: u64| {
            let mut writer = BitWriter::new();
            writer.write_bits(head, 12).unwrap();
            writer.write_bits(tail & low_mask(52), 52).unwrap();
            writer.finish()
        };
        prop_assert_eq!(a < b, pack(a, rest_a) < pack(b, rest_b));
    }
}
