#![cfg(feature = "serde")]

use hms::{SignedTime, Time};

#[test]
fn time_serializes_as_string() {
    let t: Time = "12:00:59".parse().unwrap();
    assert_eq!(serde_json::to_string(&t).unwrap(), r#""12:00:59""#);
}

#[test]
fn time_deserializes_from_string() {
    let t: Time = serde_json::from_str(r#""12:00:59""#).unwrap();
    assert_eq!(t, Time::from_hms(12, 0, 59));
    // Seconds are optional, like everywhere else.
    let t: Time = serde_json::from_str(r#""23:59""#).unwrap();
    assert_eq!(t, Time::from_hms(23, 59, 0));

    assert!(serde_json::from_str::<Time>(r#""12-00:11""#).is_err());
    assert!(serde_json::from_str::<Time>("1200").is_err());
}

#[test]
fn signed_time_round_trips() {
    let t: SignedTime = "-01:30:00".parse().unwrap();
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(json, r#""-01:30:00""#);
    assert_eq!(serde_json::from_str::<SignedTime>(&json).unwrap(), t);

    // A negative zero serializes as plain zero.
    let zero = SignedTime::from_seconds(-86_400);
    assert_eq!(serde_json::to_string(&zero).unwrap(), r#""00:00:00""#);
}

#[test]
fn embeds_in_structs() {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Alarm {
        at: Time,
        snooze: SignedTime,
    }

    let alarm = Alarm {
        at: Time::from_hms(6, 30, 0),
        snooze: SignedTime::from_seconds(-540),
    };
    let json = serde_json::to_string(&alarm).unwrap();
    assert_eq!(json, r#"{"at":"06:30:00","snooze":"-00:09:00"}"#);
    assert_eq!(serde_json::from_str::<Alarm>(&json).unwrap(), alarm);
}
