//! Envelope vector tests: decode each vector, re-encode, compare.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use ircbounce_core::Container;


#[test]
fn envelope_vectors() {
    let vectors = vector_loader::all();
    assert!(!vectors.is_empty(), "no vectors found");

    for (file, v) in vectors {
        let container: Container = serde_json::from_value(v.envelope.clone())
            .unwrap_or_else(|e| panic!("{file}: envelope does not parse: {e}"));
        let res = container.decode();

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.client_code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let payload = res.unwrap_or_else(|e| panic!("{file}: unexpected error: {e}"));
        assert_eq!(payload.message_type().as_str(), container.msg_type, "vector={}", v.description);

        let ex = v.expect.expect("missing expect block");
        assert_eq!(payload.to_object().unwrap(), ex, "vector={}", v.description);
    }
}

#[test]
fn reencoded_vectors_are_stable() {
    for (_, v) in vector_loader::all() {
        let Ok(payload) = serde_json::from_value::<Container>(v.envelope).unwrap().decode() else {
            continue;
        };
        let wrapped = Container::wrap(&payload).unwrap();
        let again = wrapped.decode().unwrap();
        assert_eq!(again, payload, "vector={}", v.description);
    }
}
