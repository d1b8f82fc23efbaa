#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use x509der::{ConstOid, Oid};

pub const SHA256: ConstOid = Oid(&[96, 134, 72, 1, 101, 3, 4, 2, 1]);

fuzz_target!(|data: &[u8]| {
    let oid = match Oid::from_content(Bytes::copy_from_slice(data)) {
        Ok(oid) => oid,
        Err(_) => return,
    };
    let dotted = oid.to_string();
    let arcs = oid.arcs();
    assert!(arcs.len() >= 2);
    assert_eq!(dotted.split('.').count(), arcs.len());

    if oid == SHA256 {
        assert_eq!(dotted, "2.16.840.1.101.3.4.2.1");
    }
});
