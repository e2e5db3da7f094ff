//! Decoder totality, defaulting, and round-trip tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;

use serde_json::{json, Value};

use ircbounce_core::protocol::{
    ChanList, ClearHistory, CommandResponse, Image, Invite, Message, NetData, NickChange, Preview,
    RawMessage, Text, WhoisData,
};
use ircbounce_core::{Container, Decode, MessageType, Payload, Shape};

fn assert_zero_for<T: Decode + Default + PartialEq + Debug>(input: &Value) {
    assert_eq!(T::decode(input), T::default(), "input={input}");
}

fn assert_zero_all(input: &Value) {
    assert_zero_for::<Message>(input);
    assert_zero_for::<RawMessage>(input);
    assert_zero_for::<NickChange>(input);
    assert_zero_for::<NetData>(input);
    assert_zero_for::<ChanList>(input);
    assert_zero_for::<Invite>(input);
    assert_zero_for::<CommandResponse>(input);
    assert_zero_for::<ClearHistory>(input);
    assert_zero_for::<WhoisData>(input);
    assert_zero_for::<Preview>(input);
    assert_zero_for::<Text>(input);
    assert_zero_for::<Image>(input);
}

#[test]
fn non_mapping_input_yields_zero_records() {
    for input in [
        json!(null),
        json!(42),
        json!(-1.5),
        json!("network"),
        json!(true),
        json!(["network", "libera"]),
    ] {
        assert_zero_all(&input);
    }
}

#[test]
fn mapping_without_known_keys_yields_zero_records() {
    assert_zero_all(&json!({}));
    assert_zero_all(&json!({ "Network": "libera", "unrelated": 1 }));
}

#[test]
fn single_field_populates_only_that_field() {
    assert_eq!(
        RawMessage::decode(&json!({ "message": "PING :x" })),
        RawMessage {
            message: "PING :x".into(),
            ..Default::default()
        }
    );
    assert_eq!(
        NickChange::decode(&json!({ "nick": "tulir_" })),
        NickChange {
            nick: "tulir_".into(),
            ..Default::default()
        }
    );
    assert_eq!(
        NetData::decode(&json!({ "port": 6697 })),
        NetData {
            port: 6697,
            ..Default::default()
        }
    );
    assert_eq!(
        ChanList::decode(&json!({ "list": ["#rust"] })),
        ChanList {
            list: vec!["#rust".into()],
            ..Default::default()
        }
    );
    assert_eq!(
        Invite::decode(&json!({ "sender": "ops" })),
        Invite {
            sender: "ops".into(),
            ..Default::default()
        }
    );
    assert_eq!(
        CommandResponse::decode(&json!({ "success": true })),
        CommandResponse {
            success: true,
            ..Default::default()
        }
    );
    assert_eq!(
        ClearHistory::decode(&json!({ "channel": "#rust" })),
        ClearHistory {
            channel: "#rust".into(),
            ..Default::default()
        }
    );
    assert_eq!(
        WhoisData::decode(&json!({ "idle": 120 })),
        WhoisData {
            idle_time: 120,
            ..Default::default()
        }
    );
    assert_eq!(
        Message::decode(&json!({ "ownmsg": true })),
        Message {
            own_msg: true,
            ..Default::default()
        }
    );
    assert_eq!(
        Image::decode(&json!({ "height": 480 })),
        Image {
            height: 480,
            ..Default::default()
        }
    );
}

#[test]
fn wrong_type_string_field_is_empty() {
    let input = json!({ "network": 123 });
    assert_eq!(RawMessage::decode(&input).network, "");
    assert_eq!(Invite::decode(&input).network, "");
    assert_eq!(ClearHistory::decode(&input).network, "");
    assert_eq!(Message::decode(&input).network, "");
}

#[test]
fn one_bad_field_does_not_abort_the_rest() {
    let msg = Message::decode(&json!({
        "id": "not-a-number",
        "network": "libera",
        "timestamp": 1476302400,
        "ownmsg": "true",
        "message": "hi",
    }));
    assert_eq!(msg.id, 0);
    assert_eq!(msg.network, "libera");
    assert_eq!(msg.timestamp, 1476302400);
    assert!(!msg.own_msg);
    assert_eq!(msg.message, "hi");
}

#[test]
fn whois_channel_roles_default_per_entry() {
    let whois = WhoisData::decode(&json!({ "channels": { "#foo": "op", "#bar": 42 } }));
    let expected: BTreeMap<String, String> =
        [("#foo".to_owned(), "op".to_owned()), ("#bar".to_owned(), String::new())].into();
    assert_eq!(whois.channels, expected);

    let whois = WhoisData::decode(&json!({ "channels": "#foo" }));
    assert!(whois.channels.is_empty());
}

#[test]
fn preview_parts_are_true_optionals() {
    let p = Preview::decode(&json!({}));
    assert!(p.text.is_none());
    assert!(p.image.is_none());
    assert!(p.is_empty());

    let p = Preview::decode(&json!({ "text": {} }));
    assert_eq!(p.text, Some(Text::default()));
    assert!(p.image.is_none());

    let p = Preview::decode(&json!({ "image": null }));
    assert!(p.image.is_none());
}

#[test]
fn message_preview_only_when_key_present() {
    assert!(Message::decode(&json!({ "id": 1 })).preview.is_none());
    assert!(Message::decode(&json!({ "preview": null })).preview.is_none());
    assert_eq!(
        Message::decode(&json!({ "preview": 5 })).preview,
        Some(Preview::default())
    );
}

fn full_message() -> Message {
    Message {
        id: 9001,
        network: "libera".into(),
        channel: "#rust".into(),
        timestamp: 1476302400,
        sender: "tulir".into(),
        command: "privmsg".into(),
        message: "look https://example.com/cat.png".into(),
        own_msg: true,
        preview: Some(Preview {
            text: Some(Text {
                title: "A cat".into(),
                description: "It is a cat.".into(),
                site_name: "example.com".into(),
            }),
            image: Some(Image {
                url: "https://example.com/cat.png".into(),
                mime: "image/png".into(),
                width: 640,
                height: 480,
            }),
        }),
    }
}

#[test]
fn full_message_round_trips() {
    let original = full_message();
    let wire = serde_json::to_value(&original).unwrap();
    assert_eq!(wire["ownmsg"], json!(true));
    assert_eq!(wire["preview"]["image"]["type"], json!("image/png"));
    assert_eq!(wire["preview"]["text"]["sitename"], json!("example.com"));

    assert_eq!(Message::decode(&wire), original);

    // Through text, the way a transport would carry it.
    let text = Container::wrap(&Payload::Message(original.clone()))
        .unwrap()
        .to_json_string()
        .unwrap();
    let back = Container::from_json_str(&text).unwrap().decode().unwrap();
    assert_eq!(back, Payload::Message(original));
}

#[test]
fn whois_and_command_response_use_hyphenated_names() {
    let whois = WhoisData {
        server_info: "Libera.Chat".into(),
        secure_conn: true,
        ..Default::default()
    };
    let wire = serde_json::to_value(&whois).unwrap();
    assert_eq!(wire["server-info"], json!("Libera.Chat"));
    assert_eq!(wire["secure-connection"], json!(true));
    assert_eq!(wire["idle"], json!(0));

    let resp = CommandResponse {
        simple_message: "ok".into(),
        ..Default::default()
    };
    let wire = serde_json::to_value(&resp).unwrap();
    assert_eq!(wire["simple-message"], json!("ok"));
}

#[test]
fn message_without_preview_omits_the_key() {
    let wire = serde_json::to_value(Message::default()).unwrap();
    assert!(wire.get("preview").is_none());
}

#[test]
fn decoding_is_deterministic() {
    let input = json!({ "channels": { "#a": "@", "#b": "+", "#c": 1 }, "nick": "n" });
    assert_eq!(WhoisData::decode(&input), WhoisData::decode(&input));
}

#[test]
fn tags_round_trip_through_str_and_serde() {
    for t in MessageType::ALL {
        assert_eq!(t.as_str().parse::<MessageType>().unwrap(), t);
        assert_eq!(serde_json::to_value(t).unwrap(), json!(t.as_str()));
        assert_eq!(t.to_string(), t.as_str());
    }
    let err = "NickChange".parse::<MessageType>().unwrap_err();
    assert_eq!(err.client_code().as_str(), "UNKNOWN_TYPE");
}

#[test]
fn tags_are_unique() {
    let mut seen = HashMap::new();
    for t in MessageType::ALL {
        assert!(seen.insert(t.as_str(), t).is_none(), "duplicate tag {t}");
    }
    assert_eq!(seen.len(), 15);
}

#[test]
fn shapes_are_shared_only_where_intended() {
    let mut by_shape: HashMap<Shape, Vec<MessageType>> = HashMap::new();
    for t in MessageType::ALL {
        by_shape.entry(t.shape()).or_default().push(t);
    }

    for (shape, tags) in &by_shape {
        match shape {
            Shape::Message => assert_eq!(
                tags,
                &[
                    MessageType::ChanData,
                    MessageType::Message,
                    MessageType::Kick,
                    MessageType::Mode
                ]
            ),
            Shape::Opaque => assert_eq!(
                tags,
                &[MessageType::Delete, MessageType::Close, MessageType::Open]
            ),
            other => assert_eq!(tags.len(), 1, "{other:?} shared by {tags:?}"),
        }
    }
}

#[test]
fn payload_decode_keeps_the_discriminator() {
    let object = json!({ "network": "libera", "channel": "#rust" });
    for t in MessageType::ALL {
        let payload = Payload::decode(t, &object);
        assert_eq!(payload.message_type(), t);
        assert_eq!(payload.shape(), t.shape());
        assert_eq!(payload.as_message().is_some(), t.shape() == Shape::Message);

        let wrapped = Container::wrap(&payload).unwrap();
        assert_eq!(wrapped.msg_type, t.as_str());
        assert_eq!(wrapped.decode().unwrap(), payload);
    }
}

#[test]
fn container_rejects_non_json() {
    let err = Container::from_json_str("{type: raw}").unwrap_err();
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");

    let err = Container::from_json_slice(br#"{"object": {}}"#).unwrap_err();
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}
