/// Picture bytes stored in the APIC frame of [`tagged_mp3`].
pub const EMBEDDED_PNG: &[u8] = b"\x89PNG\r\n\x1a\nembedded cover";

/// A small MP3: an ID3v2.3 tag holding one PNG front cover, followed by
/// silent MPEG-1 Layer III frames (128 kbps, 44.1 kHz).
pub fn tagged_mp3(picture: &[u8]) -> Vec<u8> {
    let mut apic = vec![0x00];
    apic.extend_from_slice(b"image/png\0");
    apic.push(0x03);
    apic.push(0x00);
    apic.extend_from_slice(picture);

    let mut frame = b"APIC".to_vec();
    frame.extend_from_slice(&(apic.len() as u32).to_be_bytes());
    frame.extend_from_slice(&[0x00, 0x00]);
    frame.extend_from_slice(&apic);

    let mut file = b"ID3\x03\x00\x00".to_vec();
    file.extend_from_slice(&synchsafe(frame.len() as u32));
    file.extend_from_slice(&frame);

    for _ in 0..8 {
        let mut mpeg = vec![0xFF, 0xFB, 0x90, 0x00];
        mpeg.resize(417, 0);
        file.extend_from_slice(&mpeg);
    }
    file
}

fn synchsafe(size: u32) -> [u8; 4] {
    [
        ((size >> 21) & 0x7F) as u8,
        ((size >> 14) & 0x7F) as u8,
        ((size >> 7) & 0x7F) as u8,
        (size & 0x7F) as u8,
    ]
}
