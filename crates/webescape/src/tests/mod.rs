mod javascript;
mod url;

use alloc::vec::Vec;

use crate::{EncodeResult, OperationStatus};

/// Drives a raw UTF-8 entry point over `chunks`, carrying unconsumed bytes
/// between feeds the way a caller buffering a stream would. The scratch
/// buffer is deliberately small and odd-sized so `DestinationTooSmall`
/// resumption is exercised constantly.
pub(crate) fn drive_utf8<F>(encode: F, chunks: &[&[u8]]) -> Vec<u8>
where
    F: Fn(&[u8], &mut [u8], bool) -> EncodeResult,
{
    let mut out = Vec::new();
    let mut carry: Vec<u8> = Vec::new();
    let last = chunks.len().saturating_sub(1);
    for (i, chunk) in chunks.iter().enumerate() {
        carry.extend_from_slice(chunk);
        let is_final = i == last;
        loop {
            let mut buf = [0u8; 97];
            let res = encode(&carry, &mut buf, is_final);
            out.extend_from_slice(&buf[..res.written]);
            carry.drain(..res.consumed);
            match res.status {
                OperationStatus::Done | OperationStatus::NeedMoreData => break,
                OperationStatus::DestinationTooSmall => {}
            }
        }
    }
    assert!(carry.is_empty(), "final block left input unconsumed");
    out
}

/// UTF-16 counterpart of [`drive_utf8`].
pub(crate) fn drive_utf16<F>(encode: F, chunks: &[&[u16]]) -> Vec<u16>
where
    F: Fn(&[u16], &mut [u16], bool) -> EncodeResult,
{
    let mut out = Vec::new();
    let mut carry: Vec<u16> = Vec::new();
    let last = chunks.len().saturating_sub(1);
    for (i, chunk) in chunks.iter().enumerate() {
        carry.extend_from_slice(chunk);
        let is_final = i == last;
        loop {
            let mut buf = [0u16; 61];
            let res = encode(&carry, &mut buf, is_final);
            out.extend_from_slice(&buf[..res.written]);
            carry.drain(..res.consumed);
            match res.status {
                OperationStatus::Done | OperationStatus::NeedMoreData => break,
                OperationStatus::DestinationTooSmall => {}
            }
        }
    }
    assert!(carry.is_empty(), "final block left input unconsumed");
    out
}

#[test]
fn encoders_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<crate::HtmlEncoder>();
    assert_send_sync::<crate::JavaScriptEncoder>();
    assert_send_sync::<crate::UrlEncoder>();
}
