#![no_main]

use libfuzzer_sys::fuzz_target;
use rowbuf::{Encoder, PoolManager, Role, ScalarKind, decode};

const KINDS: [ScalarKind; 11] = [
    ScalarKind::Int8,
    ScalarKind::Int16,
    ScalarKind::Int32,
    ScalarKind::Int64,
    ScalarKind::UInt32,
    ScalarKind::UInt64,
    ScalarKind::Float32,
    ScalarKind::Float64,
    ScalarKind::Timestamp,
    ScalarKind::Str,
    ScalarKind::Bytes,
];

fuzz_target!(|data: &[u8]| {
    let pools = PoolManager::default();
    let encoder = Encoder::new(&pools);

    for kind in KINDS {
        let Ok(value) = decode(kind, data) else {
            // Only width and utf-8 checks may fail.
            if let Some(width) = kind.width() {
                assert_ne!(width, data.len());
            } else {
                assert!(std::str::from_utf8(data).is_err());
            }
            continue;
        };

        // Verify: re-encoding reproduces the input bit for bit
        let encoded = encoder.encode(value).unwrap();
        assert_eq!(encoded.as_slice(), data);
    }

    // Verify: scratch buffers never leak into other roles
    for role in Role::ALL {
        if role != Role::Convert {
            assert_eq!(pools.idle(role), 0);
        }
    }
});
