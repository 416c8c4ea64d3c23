// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![cfg(feature = "serde")]

use detfix::{Scalar128, Scalar64};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Body {
    mass: Scalar64,
    position: [Scalar128; 2],
}

fn cbor<T: Serialize>(value: &T) -> Vec<u8> {
    let mut out = Vec::new();
    ciborium::into_writer(value, &mut out).expect("cbor encode");
    out
}

#[test]
fn scalars_round_trip_bit_exactly_through_cbor() {
    let body = Body {
        mass: Scalar64::from_raw(-0x1234_5678_9abc),
        position: [Scalar128::MIN, Scalar128::from_words(7, u64::MAX)],
    };
    let bytes = cbor(&body);
    let back: Body = ciborium::from_reader(bytes.as_slice()).expect("cbor decode");
    assert_eq!(back, body);
}

#[test]
fn scalar64_encodes_as_its_raw_integer() {
    let x = Scalar64::from_f64(1.5);
    assert_eq!(cbor(&x), cbor(&x.raw()));
}

#[test]
fn scalar128_encodes_as_hi_lo_words() {
    let x = Scalar128::from_f64(-2.25);
    assert_eq!(cbor(&x), cbor(&(x.hi(), x.lo())));
}
