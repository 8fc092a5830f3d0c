use futures::{StreamExt, stream};

use folio_chat::command::{Command, parse_command};
use folio_chat::error::RelayError;
use folio_chat::relay::{Utf8Decoder, decode_utf8};

#[test]
fn split_multibyte_character_is_reassembled() {
    let bytes = "héllo → wörld".as_bytes();
    let mut decoder = Utf8Decoder::new();
    let mut out = String::new();
    // One byte at a time forces every multi-byte sequence to straddle pushes.
    for b in bytes {
        out.push_str(&decoder.push(std::slice::from_ref(b)).unwrap());
    }
    decoder.finish().unwrap();
    assert_eq!(out, "héllo → wörld");
}

#[test]
fn invalid_utf8_is_rejected() {
    let mut decoder = Utf8Decoder::new();
    assert!(matches!(
        decoder.push(&[b'a', 0xff, b'b']),
        Err(RelayError::Decode(_))
    ));
}

#[test]
fn truncated_character_fails_on_finish() {
    let mut decoder = Utf8Decoder::new();
    let arrow = "→".as_bytes();
    assert_eq!(decoder.push(&arrow[..2]).unwrap(), "");
    assert!(decoder.finish().is_err());
}

#[tokio::test]
async fn decoded_stream_skips_empty_chunks_and_stops_after_error() {
    let euro = "€".as_bytes();
    let body = stream::iter(vec![
        Ok::<Vec<u8>, String>(b"price: ".to_vec()),
        Ok(euro[..1].to_vec()),
        Ok(euro[1..].to_vec()),
        Err("reset".to_string()),
        Ok(b"never".to_vec()),
    ]);

    let items: Vec<_> = decode_utf8(body).collect().await;

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].as_deref().ok(), Some("price: "));
    assert_eq!(items[1].as_deref().ok(), Some("€"));
    assert!(matches!(items[2], Err(RelayError::Stream(_))));
}

#[test]
fn commands_are_parsed() {
    assert_eq!(
        parse_command("  what do you build?  "),
        Command::Prompt("what do you build?".to_string())
    );
    assert_eq!(parse_command("/suggest"), Command::Suggest(None));
    assert_eq!(parse_command("/suggest 2"), Command::Suggest(Some(1)));
    assert_eq!(parse_command("/projects"), Command::Projects);
    assert_eq!(
        parse_command("/open astra-link"),
        Command::Open("astra-link".to_string())
    );
    assert_eq!(parse_command("/close"), Command::Close);
    assert_eq!(parse_command("/quit"), Command::Quit);
}

#[test]
fn bad_commands_are_reported() {
    assert!(matches!(parse_command("/suggest 0"), Command::Invalid(_)));
    assert!(matches!(parse_command("/suggest 9"), Command::Invalid(_)));
    assert!(matches!(parse_command("/open"), Command::Invalid(_)));
    assert!(matches!(parse_command("/dance"), Command::Invalid(_)));
}
