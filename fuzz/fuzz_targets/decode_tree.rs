#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use x509der::Node;

fuzz_target!(|data: &[u8]| {
    let node = match Node::parse_buffer(Bytes::copy_from_slice(data)) {
        Ok(node) => node,
        Err(_) => return,
    };

    // Untouched trees encode back to exactly the input.
    assert_eq!(node.to_der().as_ref(), data);
    assert_eq!(node.encoded_len(), data.len());
    let _ = node.to_string();

    let mut node = node;
    if let Some(first) = node.subs_mut().first_mut() {
        first.set_value(Bytes::new());
    }
    let again = Node::parse_buffer(node.to_der()).unwrap();
    assert_eq!(again.to_der(), node.to_der());
});
