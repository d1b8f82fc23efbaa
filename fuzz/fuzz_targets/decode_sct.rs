#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use x509der::x509::SignedCertificateTimestamp;

fuzz_target!(|data: &[u8]| {
    let scts = match SignedCertificateTimestamp::decode_list(
        Bytes::copy_from_slice(data)
    ) {
        Ok(scts) => scts,
        Err(_) => return,
    };
    for sct in scts {
        assert_eq!(sct.log_id().len(), 32);
        let _ = sct.datetime();
        let _ = sct.signed_data(b"");
    }
});
